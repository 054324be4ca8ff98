use anyhow::Result;
use clap::{Args, Parser, Subcommand};

pub mod admin;
pub mod applications;
pub mod cv;
pub mod display;
pub mod employer;
pub mod favorites;
pub mod jobs;
pub mod login;
pub mod menu;
pub mod profile;
pub mod suggestions;
pub mod ui;

pub use applications::run_applications;
pub use cv::run_cv;
pub use favorites::run_favorites;
pub use jobs::run_jobs;
pub use login::{run_login, run_logout, run_register};
pub use menu::run_menu;
pub use profile::run_profile;
pub use suggestions::run_suggestions;

use crate::access::{self, Access};
use crate::api::ApiClient;
use crate::models::UserRole;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "jobcmd")]
#[command(about = "Job board client for the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in
    Login,
    /// Create an account
    Register,
    /// Sign out
    Logout,
    /// Browse job listings
    Jobs(JobsArgs),
    /// Favorited jobs (job seekers)
    Favorites,
    /// Track your applications (job seekers)
    Applications,
    /// Manage your CVs (job seekers)
    Cv,
    /// Ranked job suggestions for a CV (job seekers)
    Suggest,
    /// View and edit your profile
    Profile,
    /// Manage your job postings (employers)
    MyJobs,
    /// Review applicants (employers)
    Applicants,
    /// System statistics (admins)
    Dashboard,
    /// Manage users (admins)
    Users(UsersArgs),
    /// Manage companies (admins)
    Companies,
}

#[derive(Args)]
pub struct JobsArgs {
    /// Filter listings by a search term
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct UsersArgs {
    /// Filter users by name or email
    #[arg(short, long)]
    pub search: Option<String>,
    /// Filter users by role (Admin, Employer, JobSeeker)
    #[arg(short, long)]
    pub role: Option<String>,
}

/// Apply the uniform view-gating policy: signed out offers the login view,
/// a role mismatch renders the denial and goes back. Returns whether the
/// screen may proceed.
pub(crate) fn require_role(
    api: &mut ApiClient,
    session: &mut Session,
    required: &'static [UserRole],
) -> Result<bool> {
    loop {
        match access::check(session.user(), required) {
            Access::Granted => return Ok(true),
            Access::SignedOut => {
                ui::status("Please log in to continue.");
                if !ui::confirm("Log in now?")? {
                    return Ok(false);
                }
                login::run_login(api, session)?;
                if session.user().is_none() {
                    return Ok(false);
                }
                // Re-check the role with the fresh identity
            }
            Access::Denied { required, actual } => {
                ui::error(&access::denial_message(required, actual));
                ui::wait_for_continue();
                return Ok(false);
            }
        }
    }
}
