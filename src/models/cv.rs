use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job seeker's CV. One user may own several; suggestions are computed
/// against a single selected CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    pub cv_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience_years: Option<i32>,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub skills_text: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Body for `POST /cv` and `PUT /cv/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvForm {
    pub summary: String,
    pub experience_years: Option<i32>,
    pub education_level: String,
    pub skills_text: String,
    pub skill_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_optional_fields_default() {
        let json = r#"{"cvId": 1, "userId": 2, "createdAt": "2024-01-01T00:00:00Z"}"#;
        let cv: Cv = serde_json::from_str(json).unwrap();
        assert!(cv.summary.is_none());
        assert!(cv.skills.is_empty());
    }
}
