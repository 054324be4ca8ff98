//! Applicant review for employers.
//!
//! Accepting an applicant is a server-side cascade: the applicant is hired
//! into the company, the job is marked filled, and every other pending
//! application for that job is auto-rejected. The confirmation spells that
//! out before the request is sent.

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::{display, require_role, ui};
use crate::models::{Application, ApplicationStatus, UserRole};
use crate::session::Session;
use crate::tracker::RequestTracker;

const ALLOWED: &[UserRole] = &[UserRole::Employer];

const FILTERS: &[(&str, Option<ApplicationStatus>)] = &[
    ("All", None),
    ("Pending", Some(ApplicationStatus::Pending)),
    ("Accepted", Some(ApplicationStatus::Accepted)),
    ("Rejected", Some(ApplicationStatus::Rejected)),
];

pub fn run_employer_applications(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if !require_role(api, session, ALLOWED)? {
        return Ok(());
    }

    let mut filter: Option<ApplicationStatus> = None;
    let mut tracker = RequestTracker::new();
    loop {
        let applications = match api.applications() {
            Ok(applications) => applications,
            Err(e) => {
                ui::error(&e.to_string());
                return Ok(());
            }
        };

        let shown: Vec<&Application> = applications
            .iter()
            .filter(|a| filter.map(|f| a.status == f).unwrap_or(true))
            .collect();

        if applications.is_empty() {
            ui::status("No applications for your postings yet.");
            return Ok(());
        }

        let mut options: Vec<String> = shown.iter().map(|a| applicant_row(a)).collect();
        options.push(format!(
            "Filter: {}…",
            filter.map(|f| f.to_string()).unwrap_or_else(|| "All".into())
        ));
        options.push("Back".into());

        let Some(idx) = ui::select("applicants:", &options)? else {
            return Ok(());
        };
        if idx == shown.len() {
            let labels: Vec<&str> = FILTERS.iter().map(|(label, _)| *label).collect();
            if let Some(pick) = ui::select("show:", &labels)? {
                filter = FILTERS[pick].1;
            }
            continue;
        }
        if idx == shown.len() + 1 {
            return Ok(());
        }

        applicant_actions(api, shown[idx], &mut tracker)?;
    }
}

fn applicant_row(application: &Application) -> String {
    format!(
        "{} <{}> — {} ({}, {})",
        application.applicant_name.as_deref().unwrap_or("(unknown)"),
        application.applicant_email.as_deref().unwrap_or("?"),
        application.job_title.as_deref().unwrap_or("(unknown job)"),
        application.status,
        display::format_date(&application.created_at)
    )
}

fn applicant_actions(
    api: &ApiClient,
    application: &Application,
    tracker: &mut RequestTracker,
) -> Result<()> {
    println!();
    println!("{}", applicant_row(application));
    println!();

    let mut actions: Vec<&str> = vec!["View CV"];
    if application.status == ApplicationStatus::Pending {
        actions.push("Accept");
        actions.push("Reject");
    } else {
        actions.push("Reset to pending");
    }
    actions.push("Back");

    let Some(idx) = ui::select("actions:", &actions)? else {
        return Ok(());
    };
    match actions[idx] {
        "View CV" => {
            view_cv(api, application);
            ui::wait_for_continue();
        }
        "Accept" => {
            let name = application.applicant_name.as_deref().unwrap_or("this applicant");
            let prompt = format!(
                "Accept {}? They join your company, the job is marked filled, \
                 other pending applications are auto-rejected, and the listing is closed.",
                name
            );
            if ui::confirm(&prompt)? {
                set_status(api, tracker, application, ApplicationStatus::Accepted);
            }
        }
        "Reject" => {
            if ui::confirm("Reject this application?")? {
                set_status(api, tracker, application, ApplicationStatus::Rejected);
            }
        }
        "Reset to pending" => {
            set_status(api, tracker, application, ApplicationStatus::Pending);
        }
        _ => {}
    }
    Ok(())
}

fn view_cv(api: &ApiClient, application: &Application) {
    // Some listings embed the CV; otherwise fetch it on demand
    match application.cv {
        Some(ref cv) => display::print_cv_detail(cv),
        None => match api.application_cv(application.application_id) {
            Ok(cv) => display::print_cv_detail(&cv),
            Err(e) => ui::error(&e.to_string()),
        },
    }
}

fn set_status(
    api: &ApiClient,
    tracker: &mut RequestTracker,
    application: &Application,
    status: ApplicationStatus,
) {
    if !tracker.begin(application.application_id) {
        ui::warning("A request for this application is already in progress.");
        return;
    }
    match api.update_application_status(application.application_id, status) {
        Ok(()) => {
            tracker.finish(application.application_id);
            ui::status(&format!("Application marked {}.", status));
        }
        Err(e) => {
            let message = e.to_string();
            tracker.fail(application.application_id, message.clone());
            ui::error(&message);
        }
    }
}
