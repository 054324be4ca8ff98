use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as listed by the API. `skills` is a flat list of names, not
/// ids; suggestion matching works on these names directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    pub company_name: String,
    pub department_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub has_applied: bool,
    #[serde(default)]
    pub is_filled: Option<bool>,
}

impl Job {
    /// Whether the position has been awarded. Absent means open.
    pub fn filled(&self) -> bool {
        self.is_filled.unwrap_or(false)
    }

    /// Employers may edit or delete a posting only while it is open. The
    /// server enforces this too; the check here avoids a doomed request.
    pub fn editable(&self) -> bool {
        !self.filled()
    }
}

/// Body for `POST /jobs` and `PUT /jobs/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub department_id: i64,
    pub skill_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_defaults_for_missing_flags() {
        let json = r#"{
            "jobId": 9,
            "title": "Backend Engineer",
            "description": "APIs all day",
            "companyName": "Acme",
            "departmentName": "Engineering",
            "createdAt": "2024-05-10T12:00:00Z"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert!(job.skills.is_empty());
        assert!(!job.is_favorited);
        assert!(!job.has_applied);
        assert!(!job.filled());
    }

    #[test]
    fn test_filled_jobs_are_not_editable() {
        let json = r#"{
            "jobId": 9,
            "title": "Backend Engineer",
            "description": "APIs all day",
            "companyName": "Acme",
            "departmentName": "Engineering",
            "createdAt": "2024-05-10T12:00:00Z",
            "isFilled": true
        }"#;
        let filled: Job = serde_json::from_str(json).unwrap();
        assert!(filled.filled());
        assert!(!filled.editable());

        let open = Job { is_filled: Some(false), ..filled.clone() };
        assert!(open.editable());
        // Absent flag means the position is still open
        let unknown = Job { is_filled: None, ..filled };
        assert!(unknown.editable());
    }

    #[test]
    fn test_job_form_wire_names() {
        let form = JobForm {
            title: "QA".into(),
            description: "testing".into(),
            location: None,
            salary_min: Some(40000.0),
            salary_max: None,
            department_id: 3,
            skill_ids: vec![1, 2],
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["departmentId"], 3);
        assert_eq!(value["salaryMin"], 40000.0);
        assert!(value["location"].is_null());
    }
}
