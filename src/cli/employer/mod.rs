//! Employer screens: posting management and applicant review.

pub mod applications;
pub mod jobs;

pub use applications::run_employer_applications;
pub use jobs::run_employer_jobs;
