use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::models::{User, UserRole};

/// Successful login/register response: the bearer token plus the user record.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Registration payload. The role travels as the numeric enum the backend
/// expects, handled by `UserRole`'s `Serialize` impl.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
}

impl ApiClient {
    pub fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", &LoginRequest { email, password })
    }

    pub fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", request)
    }

    pub fn update_profile(
        &self,
        name: &str,
        surname: &str,
        phone: Option<&str>,
    ) -> Result<User, ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'a str,
            surname: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            phone: Option<&'a str>,
        }
        self.put("/users/profile", &Body { name, surname, phone })
    }

    pub fn change_password(&self, current: &str, new: &str) -> Result<(), ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            current_password: &'a str,
            new_password: &'a str,
        }
        self.post_ok(
            "/users/change-password",
            &Body { current_password: current, new_password: new },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_sends_numeric_role() {
        let request = RegisterRequest {
            name: "Mia".into(),
            surname: "Chen".into(),
            email: "mia@example.com".into(),
            password: "secret1".into(),
            phone: None,
            role: UserRole::Employer,
            company_id: Some(12),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["role"], 1);
        assert_eq!(value["companyId"], 12);
        assert!(value.get("phone").is_none());
    }
}
