//! Admin screens: system dashboard, user management, company management.

pub mod companies;
pub mod dashboard;
pub mod users;

pub use companies::run_companies;
pub use dashboard::run_dashboard;
pub use users::run_users;
