//! Interactive main menu, shown when jobcmd runs with no subcommand.
//!
//! The option list is built from the signed-in role, so the menu never
//! offers a screen its viewer would be bounced from.

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::{admin, applications, cv, employer, favorites, jobs, login, profile, suggestions, ui};
use crate::models::UserRole;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    BrowseJobs,
    Favorites,
    MyApplications,
    MyCvs,
    Suggestions,
    MyJobPostings,
    Applicants,
    Dashboard,
    Users,
    Companies,
    Profile,
    Login,
    Register,
    Logout,
    Quit,
}

impl MenuOption {
    fn label(&self) -> &'static str {
        match self {
            MenuOption::BrowseJobs => "Browse Jobs",
            MenuOption::Favorites => "Favorites",
            MenuOption::MyApplications => "My Applications",
            MenuOption::MyCvs => "My CVs",
            MenuOption::Suggestions => "Suggestions",
            MenuOption::MyJobPostings => "My Job Postings",
            MenuOption::Applicants => "Applicants",
            MenuOption::Dashboard => "Dashboard",
            MenuOption::Users => "Users",
            MenuOption::Companies => "Companies",
            MenuOption::Profile => "Profile",
            MenuOption::Login => "Login",
            MenuOption::Register => "Register",
            MenuOption::Logout => "Logout",
            MenuOption::Quit => "Quit",
        }
    }

    fn options_for(role: Option<UserRole>) -> Vec<MenuOption> {
        match role {
            None => vec![
                MenuOption::BrowseJobs,
                MenuOption::Login,
                MenuOption::Register,
                MenuOption::Quit,
            ],
            Some(UserRole::JobSeeker) | Some(UserRole::Unknown) => vec![
                MenuOption::BrowseJobs,
                MenuOption::Favorites,
                MenuOption::MyApplications,
                MenuOption::MyCvs,
                MenuOption::Suggestions,
                MenuOption::Profile,
                MenuOption::Logout,
                MenuOption::Quit,
            ],
            Some(UserRole::Employer) => vec![
                MenuOption::BrowseJobs,
                MenuOption::MyJobPostings,
                MenuOption::Applicants,
                MenuOption::Profile,
                MenuOption::Logout,
                MenuOption::Quit,
            ],
            Some(UserRole::Admin) => vec![
                MenuOption::Dashboard,
                MenuOption::Users,
                MenuOption::Companies,
                MenuOption::Profile,
                MenuOption::Logout,
                MenuOption::Quit,
            ],
        }
    }
}

pub fn run_menu(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    loop {
        ui::clear_screen()?;
        let (header, role) = match session.user() {
            Some(user) => (format!("{} ({})", user.full_name(), user.role), Some(user.role)),
            None => ("jobcmd".to_string(), None),
        };
        println!("{}", header);
        println!();

        let options = MenuOption::options_for(role);
        let labels: Vec<&str> = options.iter().map(|o| o.label()).collect();
        let Some(idx) = ui::select("menu:", &labels)? else {
            return Ok(());
        };

        let result = match options[idx] {
            MenuOption::BrowseJobs => jobs::run_jobs(api, session, None),
            MenuOption::Favorites => favorites::run_favorites(api, session),
            MenuOption::MyApplications => applications::run_applications(api, session),
            MenuOption::MyCvs => cv::run_cv(api, session),
            MenuOption::Suggestions => suggestions::run_suggestions(api, session),
            MenuOption::MyJobPostings => employer::run_employer_jobs(api, session),
            MenuOption::Applicants => employer::run_employer_applications(api, session),
            MenuOption::Dashboard => admin::run_dashboard(api, session),
            MenuOption::Users => admin::run_users(api, session, None, None),
            MenuOption::Companies => admin::run_companies(api, session),
            MenuOption::Profile => profile::run_profile(api, session),
            MenuOption::Login => login::run_login(api, session),
            MenuOption::Register => login::run_register(api, session),
            MenuOption::Logout => login::run_logout(api, session),
            MenuOption::Quit => return Ok(()),
        };

        if let Err(e) = result {
            eprintln!("Error: {}", e);
            ui::wait_for_continue();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_menu() {
        let options = MenuOption::options_for(None);
        assert_eq!(options[0], MenuOption::BrowseJobs);
        assert!(options.contains(&MenuOption::Login));
        assert!(options.contains(&MenuOption::Register));
        assert!(!options.contains(&MenuOption::Logout));
        assert!(!options.contains(&MenuOption::Profile));
    }

    #[test]
    fn test_job_seeker_menu() {
        let options = MenuOption::options_for(Some(UserRole::JobSeeker));
        assert!(options.contains(&MenuOption::Suggestions));
        assert!(options.contains(&MenuOption::MyCvs));
        assert!(!options.contains(&MenuOption::Dashboard));
        assert!(!options.contains(&MenuOption::MyJobPostings));
        assert!(!options.contains(&MenuOption::Login));
    }

    #[test]
    fn test_employer_menu() {
        let options = MenuOption::options_for(Some(UserRole::Employer));
        assert!(options.contains(&MenuOption::MyJobPostings));
        assert!(options.contains(&MenuOption::Applicants));
        assert!(!options.contains(&MenuOption::Favorites));
        assert!(!options.contains(&MenuOption::Users));
    }

    #[test]
    fn test_admin_menu() {
        let options = MenuOption::options_for(Some(UserRole::Admin));
        assert_eq!(options[0], MenuOption::Dashboard);
        assert!(options.contains(&MenuOption::Users));
        assert!(options.contains(&MenuOption::Companies));
        assert!(!options.contains(&MenuOption::BrowseJobs));
        assert!(!options.contains(&MenuOption::MyApplications));
    }

    #[test]
    fn test_every_menu_ends_with_quit() {
        for role in [None, Some(UserRole::JobSeeker), Some(UserRole::Employer), Some(UserRole::Admin)] {
            let options = MenuOption::options_for(role);
            assert_eq!(*options.last().unwrap(), MenuOption::Quit);
        }
    }
}
