use serde::{Deserialize, Serialize};

/// Company record, also used by the admin management screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub company_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub sector_name: String,
    #[serde(default)]
    pub employee_count: i64,
    #[serde(default)]
    pub job_count: i64,
}

/// Body for `POST /admin/companies` and `PUT /admin/companies/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyForm {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub sector_id: i64,
}

/// Reference records fetched for pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub sector_id: i64,
    pub name: String,
}
