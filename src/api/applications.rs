use super::{ApiClient, ApiError};
use crate::models::{Application, ApplicationStatus, Cv};

impl ApiClient {
    /// The viewer's applications (job seeker) or the applications against the
    /// viewer's postings (employer) — the server decides by role.
    pub fn applications(&self) -> Result<Vec<Application>, ApiError> {
        self.get("/applications")
    }

    pub fn apply(&self, job_id: i64) -> Result<(), ApiError> {
        self.post_empty_ok(&format!("/applications/{}", job_id))
    }

    pub fn remove_application(&self, application_id: i64) -> Result<(), ApiError> {
        self.delete_ok(&format!("/applications/{}", application_id))
    }

    /// Status update takes the bare numeric status as the JSON body, matching
    /// the backend's endpoint signature.
    pub fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<(), ApiError> {
        self.put_ok(&format!("/applications/{}/status", application_id), &status.to_wire())
    }

    /// CV attached to an application, for employer review.
    pub fn application_cv(&self, application_id: i64) -> Result<Cv, ApiError> {
        self.get(&format!("/applications/{}/cv", application_id))
    }
}
