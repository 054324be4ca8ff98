//! Records specific to the admin dashboard and management screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRole;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub job_seekers: i64,
    pub employers: i64,
    pub admins: i64,
    pub total_companies: i64,
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub filled_jobs: i64,
    pub total_applications: i64,
    pub pending_applications: i64,
    pub accepted_applications: i64,
    pub rejected_applications: i64,
    #[serde(default)]
    pub companies_by_sector: Vec<SectorCount>,
    #[serde(default)]
    pub jobs_by_department: Vec<DepartmentCount>,
    #[serde(default)]
    pub recent_users: Vec<RecentUser>,
    #[serde(default)]
    pub recent_jobs: Vec<RecentJob>,
    #[serde(default)]
    pub recent_applications: Vec<RecentApplication>,
    pub user_growth: GrowthStats,
    pub job_growth: GrowthStats,
    pub application_growth: GrowthStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthStats {
    pub total: i64,
    #[serde(rename = "last30Days")]
    pub last_30_days: i64,
    #[serde(rename = "last7Days")]
    pub last_7_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorCount {
    pub sector: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCount {
    pub department: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentJob {
    pub title: String,
    pub company: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_filled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentApplication {
    pub applicant: String,
    pub job: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /admin/users`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserForm {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role: UserRole,
    pub company_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_stats_wire_names() {
        let json = r#"{"total": 120, "last30Days": 14, "last7Days": 3}"#;
        let growth: GrowthStats = serde_json::from_str(json).unwrap();
        assert_eq!(growth.last_30_days, 14);
        assert_eq!(growth.last_7_days, 3);
    }

    #[test]
    fn test_recent_user_accepts_string_role() {
        let json = r#"{
            "name": "Kim", "surname": "Lee", "email": "k@example.com",
            "role": "Employer", "createdAt": "2024-06-01T00:00:00Z"
        }"#;
        let recent: RecentUser = serde_json::from_str(json).unwrap();
        assert_eq!(recent.role, UserRole::Employer);
    }
}
