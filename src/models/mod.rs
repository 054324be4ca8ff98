pub mod admin;
pub mod application;
pub mod company;
pub mod cv;
pub mod job;
pub mod user;

pub use application::{Application, ApplicationStatus};
pub use company::{Company, CompanyForm, Department, Sector, Skill};
pub use cv::{Cv, CvForm};
pub use job::{Job, JobForm};
pub use user::{EmploymentInfo, User, UserRole};
