use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::cv::Cv;

/// A job application. Seekers see their own; employers see the ones filed
/// against their postings (with applicant fields populated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub applicant_email: Option<String>,
    pub job_id: i64,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub cv: Option<Cv>,
}

impl Application {
    /// Owners may remove an application only while it is still pending.
    /// The server enforces this too; the check here avoids a doomed request.
    pub fn removable(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}

/// Application status. Like `UserRole`, the wire value is sometimes the small
/// integer and sometimes the display string; unrecognized values collapse to
/// `Pending` rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }

    fn from_int(n: i64) -> Self {
        match n {
            1 => Self::Accepted,
            2 => Self::Rejected,
            _ => Self::Pending,
        }
    }

    pub fn to_wire(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Accepted => 1,
            Self::Rejected => 2,
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ApplicationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Int(i64),
            Text(String),
        }
        match Wire::deserialize(deserializer).map_err(de::Error::custom)? {
            Wire::Int(n) => Ok(ApplicationStatus::from_int(n)),
            Wire::Text(s) => Ok(ApplicationStatus::parse(&s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(status: ApplicationStatus) -> Application {
        Application {
            application_id: 1,
            user_id: 2,
            applicant_name: None,
            applicant_email: None,
            job_id: 3,
            job_title: Some("Backend Engineer".into()),
            company_name: None,
            status,
            created_at: "2024-02-02T00:00:00Z".parse().unwrap(),
            cv: None,
        }
    }

    #[test]
    fn test_status_parse_is_total_and_idempotent() {
        for input in ["Pending", "Accepted", "Rejected", "accepted", "withdrawn", ""] {
            let status = ApplicationStatus::parse(input);
            assert_eq!(ApplicationStatus::parse(status.as_str()), status);
        }
        // Unrecognized falls back to Pending, never an error
        assert_eq!(ApplicationStatus::parse("withdrawn"), ApplicationStatus::Pending);
    }

    #[test]
    fn test_status_from_either_representation() {
        let from_int: ApplicationStatus = serde_json::from_str("2").unwrap();
        let from_str: ApplicationStatus = serde_json::from_str("\"Rejected\"").unwrap();
        assert_eq!(from_int, ApplicationStatus::Rejected);
        assert_eq!(from_str, ApplicationStatus::Rejected);
        let odd: ApplicationStatus = serde_json::from_str("9").unwrap();
        assert_eq!(odd, ApplicationStatus::Pending);
    }

    #[test]
    fn test_only_pending_applications_are_removable() {
        assert!(application(ApplicationStatus::Pending).removable());
        assert!(!application(ApplicationStatus::Accepted).removable());
        assert!(!application(ApplicationStatus::Rejected).removable());
    }
}
