//! Application tracking screen (job seekers).
//!
//! An application can be removed only while it is still pending; the check
//! runs locally so no doomed request is sent for decided applications.

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::{display, require_role, ui};
use crate::models::{Application, UserRole};
use crate::session::Session;
use crate::tracker::RequestTracker;

const ALLOWED: &[UserRole] = &[UserRole::JobSeeker];

pub fn run_applications(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if !require_role(api, session, ALLOWED)? {
        return Ok(());
    }

    let mut tracker = RequestTracker::new();
    loop {
        let applications = match api.applications() {
            Ok(applications) => applications,
            Err(e) => {
                ui::error(&e.to_string());
                return Ok(());
            }
        };

        if applications.is_empty() {
            ui::status("You have not applied to any jobs yet.");
            return Ok(());
        }

        let pending = applications.iter().filter(|a| a.removable()).count();
        if pending > 0 {
            ui::status(&format!(
                "{} application{} ({} pending)",
                applications.len(),
                if applications.len() == 1 { "" } else { "s" },
                pending
            ));
        }

        let mut options: Vec<String> = applications.iter().map(display::application_row).collect();
        options.push("Back".into());

        let Some(idx) = ui::select("applications:", &options)? else {
            return Ok(());
        };
        if idx == applications.len() {
            return Ok(());
        }

        if !remove_flow(api, &mut tracker, &applications[idx])? {
            continue;
        }
    }
}

/// Offer removal for the selected application. Returns whether a removal
/// request was actually sent.
fn remove_flow(
    api: &ApiClient,
    tracker: &mut RequestTracker,
    application: &Application,
) -> Result<bool> {
    let job = application.job_title.as_deref().unwrap_or("(unknown job)");

    if !application.removable() {
        ui::status(&format!(
            "This application is {} and can no longer be removed. Only pending applications can be withdrawn.",
            application.status
        ));
        return Ok(false);
    }

    let prompt = format!(
        "Remove your application for \"{}\"? This cannot be undone.",
        job
    );
    if !ui::confirm(&prompt)? {
        return Ok(false);
    }

    if !tracker.begin(application.application_id) {
        ui::warning("A request for this application is already in progress.");
        return Ok(false);
    }
    match api.remove_application(application.application_id) {
        Ok(()) => {
            tracker.finish(application.application_id);
            ui::status(&format!("Your application for \"{}\" has been removed.", job));
            Ok(true)
        }
        Err(e) => {
            let message = e.to_string();
            tracker.fail(application.application_id, message.clone());
            ui::error(&message);
            Ok(false)
        }
    }
}
