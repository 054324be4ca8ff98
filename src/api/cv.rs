use super::{ApiClient, ApiError};
use crate::models::{Company, Cv, CvForm, Department, Skill};

impl ApiClient {
    pub fn cvs(&self) -> Result<Vec<Cv>, ApiError> {
        self.get("/cv")
    }

    pub fn create_cv(&self, form: &CvForm) -> Result<(), ApiError> {
        self.post_ok("/cv", form)
    }

    pub fn update_cv(&self, cv_id: i64, form: &CvForm) -> Result<(), ApiError> {
        self.put_ok(&format!("/cv/{}", cv_id), form)
    }

    pub fn delete_cv(&self, cv_id: i64) -> Result<(), ApiError> {
        self.delete_ok(&format!("/cv/{}", cv_id))
    }

    // Reference data for pickers.

    pub fn skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.get("/skills")
    }

    pub fn departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get("/departments")
    }

    pub fn companies(&self) -> Result<Vec<Company>, ApiError> {
        self.get("/companies")
    }
}
