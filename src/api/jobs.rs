use super::{ApiClient, ApiError};
use crate::models::{Job, JobForm};

impl ApiClient {
    /// Public job listing, optionally filtered by a free-text search.
    pub fn jobs(&self, search: Option<&str>) -> Result<Vec<Job>, ApiError> {
        match search {
            Some(term) if !term.is_empty() => self.get_query("/jobs", &[("search", term)]),
            _ => self.get("/jobs"),
        }
    }

    /// Jobs belonging to the signed-in employer's company.
    pub fn employer_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get("/jobs/employer")
    }

    pub fn create_job(&self, form: &JobForm) -> Result<(), ApiError> {
        self.post_ok("/jobs", form)
    }

    pub fn update_job(&self, job_id: i64, form: &JobForm) -> Result<(), ApiError> {
        self.put_ok(&format!("/jobs/{}", job_id), form)
    }

    pub fn delete_job(&self, job_id: i64) -> Result<(), ApiError> {
        self.delete_ok(&format!("/jobs/{}", job_id))
    }

    pub fn favorites(&self) -> Result<Vec<Job>, ApiError> {
        self.get("/favorites")
    }

    pub fn add_favorite(&self, job_id: i64) -> Result<(), ApiError> {
        self.post_empty_ok(&format!("/favorites/{}", job_id))
    }

    pub fn remove_favorite(&self, job_id: i64) -> Result<(), ApiError> {
        self.delete_ok(&format!("/favorites/{}", job_id))
    }
}
