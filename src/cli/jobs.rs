//! Public job listing screen: browse, search, and (for job seekers) apply
//! and favorite.

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::{display, ui};
use crate::models::{Job, UserRole};
use crate::session::Session;
use crate::tracker::RequestTracker;

pub fn run_jobs(api: &mut ApiClient, session: &mut Session, search: Option<String>) -> Result<()> {
    let mut search = search.filter(|s| !s.is_empty());
    let mut tracker = RequestTracker::new();

    loop {
        let jobs = match api.jobs(search.as_deref()) {
            Ok(jobs) => jobs,
            Err(e) => {
                ui::error(&e.to_string());
                return Ok(());
            }
        };

        if jobs.is_empty() {
            ui::status("No jobs found.");
        }

        let mut options: Vec<String> = jobs
            .iter()
            .map(|job| display::job_row_with_error(job, tracker.error(job.job_id)))
            .collect();
        options.push("Search…".into());
        options.push("Back".into());

        let prompt = match search {
            Some(ref term) => format!("jobs matching '{}':", term),
            None => "jobs:".into(),
        };
        let Some(idx) = ui::select(&prompt, &options)? else {
            return Ok(());
        };

        if idx == jobs.len() {
            search = ui::text_input("search: ", search.as_deref())?
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
            continue;
        }
        if idx == jobs.len() + 1 {
            return Ok(());
        }

        job_actions(api, session, &jobs[idx], &mut tracker)?;
    }
}

fn job_actions(
    api: &ApiClient,
    session: &Session,
    job: &Job,
    tracker: &mut RequestTracker,
) -> Result<()> {
    println!();
    display::print_job_detail(job);
    println!();

    let is_seeker = session
        .user()
        .map(|u| u.role == UserRole::JobSeeker)
        .unwrap_or(false);

    let mut actions: Vec<&str> = Vec::new();
    if is_seeker {
        if job.has_applied {
            actions.push("Applied ✓");
        } else if !job.filled() {
            actions.push("Apply");
        }
        actions.push(if job.is_favorited { "Remove favorite" } else { "Add favorite" });
    }
    actions.push("Back");

    let Some(idx) = ui::select("actions:", &actions)? else {
        return Ok(());
    };
    match actions[idx] {
        "Apply" => {
            apply_to_job(api, tracker, job.job_id);
        }
        "Add favorite" | "Remove favorite" => {
            toggle_favorite(api, tracker, job.job_id, job.is_favorited);
        }
        _ => {}
    }
    Ok(())
}

/// Submit an application for `job_id`, guarding against a duplicate
/// submission for the same job. Returns whether the application went through.
pub(crate) fn apply_to_job(api: &ApiClient, tracker: &mut RequestTracker, job_id: i64) -> bool {
    if !tracker.begin(job_id) {
        ui::warning("A request for this job is already in progress.");
        return false;
    }
    match api.apply(job_id) {
        Ok(()) => {
            tracker.finish(job_id);
            ui::status("Application submitted successfully!");
            true
        }
        Err(e) => {
            let message = e.to_string();
            tracker.fail(job_id, message.clone());
            ui::error(&message);
            false
        }
    }
}

/// Flip the favorite state of `job_id`. Returns whether the change stuck.
pub(crate) fn toggle_favorite(
    api: &ApiClient,
    tracker: &mut RequestTracker,
    job_id: i64,
    is_favorited: bool,
) -> bool {
    if !tracker.begin(job_id) {
        ui::warning("A request for this job is already in progress.");
        return false;
    }
    let result = if is_favorited {
        api.remove_favorite(job_id)
    } else {
        api.add_favorite(job_id)
    };
    match result {
        Ok(()) => {
            tracker.finish(job_id);
            ui::status(if is_favorited { "Removed from favorites." } else { "Added to favorites." });
            true
        }
        Err(e) => {
            let message = e.to_string();
            tracker.fail(job_id, message.clone());
            ui::error(&message);
            false
        }
    }
}
