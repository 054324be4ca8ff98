use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A signed-in user as the API reports it (and as persisted in the local
/// session snapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_employment: Option<EmploymentInfo>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Employment details attached to a job seeker once hired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentInfo {
    pub company_name: String,
    pub department_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_location: Option<String>,
    pub start_date: DateTime<Utc>,
}

/// User role. The server serializes this field inconsistently across
/// endpoints (small integer on some, display string on others), so
/// deserialization accepts both and anything unrecognized becomes `Unknown`
/// instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    Admin,
    Employer,
    #[default]
    JobSeeker,
    Unknown,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employer => "Employer",
            Self::JobSeeker => "JobSeeker",
            Self::Unknown => "Unknown",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Self::Admin,
            "employer" => Self::Employer,
            "jobseeker" => Self::JobSeeker,
            _ => Self::Unknown,
        }
    }

    fn from_int(n: i64) -> Self {
        match n {
            0 => Self::Admin,
            1 => Self::Employer,
            2 => Self::JobSeeker,
            _ => Self::Unknown,
        }
    }

    /// Numeric value the server expects on writes. `Unknown` is never offered
    /// by any role picker; if it somehow reaches a write it degrades to the
    /// job-seeker value, matching the original client's default.
    pub fn to_wire(self) -> u8 {
        match self {
            Self::Admin => 0,
            Self::Employer => 1,
            Self::JobSeeker | Self::Unknown => 2,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Int(i64),
            Text(String),
        }
        match Wire::deserialize(deserializer).map_err(de::Error::custom)? {
            Wire::Int(n) => Ok(UserRole::from_int(n)),
            Wire::Text(s) => Ok(UserRole::parse(&s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_total_and_idempotent() {
        for input in ["Admin", "Employer", "JobSeeker", "admin", "EMPLOYER", "manager", ""] {
            let role = UserRole::parse(input);
            // Normalizing an already-normalized label is stable
            assert_eq!(UserRole::parse(role.as_str()), role);
        }
        assert_eq!(UserRole::parse("manager"), UserRole::Unknown);
        assert_eq!(UserRole::Unknown.as_str(), "Unknown");
    }

    #[test]
    fn test_role_from_either_representation() {
        let from_int: UserRole = serde_json::from_str("1").unwrap();
        let from_str: UserRole = serde_json::from_str("\"Employer\"").unwrap();
        assert_eq!(from_int, UserRole::Employer);
        assert_eq!(from_str, UserRole::Employer);
    }

    #[test]
    fn test_role_unrecognized_values_do_not_fail() {
        let odd_int: UserRole = serde_json::from_str("7").unwrap();
        let odd_str: UserRole = serde_json::from_str("\"Owner\"").unwrap();
        assert_eq!(odd_int, UserRole::Unknown);
        assert_eq!(odd_str, UserRole::Unknown);
    }

    #[test]
    fn test_role_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "0");
        assert_eq!(serde_json::to_string(&UserRole::Employer).unwrap(), "1");
        assert_eq!(serde_json::to_string(&UserRole::JobSeeker).unwrap(), "2");
    }

    #[test]
    fn test_user_round_trip_with_string_role() {
        let json = r#"{
            "userId": 4,
            "name": "Ada",
            "surname": "Park",
            "email": "ada@example.com",
            "role": "JobSeeker",
            "createdAt": "2024-03-01T09:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::JobSeeker);
        assert_eq!(user.full_name(), "Ada Park");
        assert!(user.company_id.is_none());
    }
}
