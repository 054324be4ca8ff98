use super::{ApiClient, ApiError};
use crate::models::admin::{CreateUserForm, DashboardStats};
use crate::models::{Company, CompanyForm, Sector, User, UserRole};

impl ApiClient {
    pub fn admin_dashboard(&self) -> Result<DashboardStats, ApiError> {
        self.get("/admin/dashboard")
    }

    pub fn admin_users(
        &self,
        search: Option<&str>,
        role: Option<UserRole>,
    ) -> Result<Vec<User>, ApiError> {
        let role_name;
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(term) = search.filter(|t| !t.is_empty()) {
            query.push(("search", term));
        }
        if let Some(r) = role {
            role_name = r.as_str();
            query.push(("role", role_name));
        }
        if query.is_empty() {
            self.get("/admin/users")
        } else {
            self.get_query("/admin/users", &query)
        }
    }

    pub fn admin_create_user(&self, form: &CreateUserForm) -> Result<(), ApiError> {
        self.post_ok("/admin/users", form)
    }

    pub fn admin_delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.delete_ok(&format!("/admin/users/{}", user_id))
    }

    /// Role update sends the bare role-name string as the JSON body, matching
    /// the backend's endpoint signature.
    pub fn admin_update_user_role(&self, user_id: i64, role: UserRole) -> Result<(), ApiError> {
        self.put_ok(&format!("/admin/users/{}/role", user_id), &role.as_str())
    }

    pub fn admin_companies(&self) -> Result<Vec<Company>, ApiError> {
        self.get("/admin/companies")
    }

    pub fn admin_create_company(&self, form: &CompanyForm) -> Result<(), ApiError> {
        self.post_ok("/admin/companies", form)
    }

    pub fn admin_update_company(&self, company_id: i64, form: &CompanyForm) -> Result<(), ApiError> {
        self.put_ok(&format!("/admin/companies/{}", company_id), form)
    }

    pub fn admin_delete_company(&self, company_id: i64) -> Result<(), ApiError> {
        self.delete_ok(&format!("/admin/companies/{}", company_id))
    }

    pub fn admin_sectors(&self) -> Result<Vec<Sector>, ApiError> {
        self.get("/admin/sectors")
    }
}
