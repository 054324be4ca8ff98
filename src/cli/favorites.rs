//! Favorited jobs screen (job seekers).

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::jobs::{apply_to_job, toggle_favorite};
use crate::cli::{display, require_role, ui};
use crate::models::UserRole;
use crate::session::Session;
use crate::tracker::RequestTracker;

const ALLOWED: &[UserRole] = &[UserRole::JobSeeker];

pub fn run_favorites(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if !require_role(api, session, ALLOWED)? {
        return Ok(());
    }

    let mut tracker = RequestTracker::new();
    loop {
        let favorites = match api.favorites() {
            Ok(favorites) => favorites,
            Err(e) => {
                ui::error(&e.to_string());
                return Ok(());
            }
        };

        if favorites.is_empty() {
            ui::status("No favorite jobs yet. Browse jobs and mark the ones you like.");
            return Ok(());
        }

        let mut options: Vec<String> = favorites
            .iter()
            .map(|job| display::job_row_with_error(job, tracker.error(job.job_id)))
            .collect();
        options.push("Back".into());

        let Some(idx) = ui::select("favorites:", &options)? else {
            return Ok(());
        };
        if idx == favorites.len() {
            return Ok(());
        }

        let job = &favorites[idx];
        println!();
        display::print_job_detail(job);
        println!();

        let mut actions: Vec<&str> = Vec::new();
        if job.has_applied {
            actions.push("Applied ✓");
        } else if !job.filled() {
            actions.push("Apply");
        }
        actions.push("Remove favorite");
        actions.push("Back");

        let Some(action_idx) = ui::select("actions:", &actions)? else {
            continue;
        };
        match actions[action_idx] {
            "Apply" => {
                apply_to_job(api, &mut tracker, job.job_id);
            }
            "Remove favorite" => {
                toggle_favorite(api, &mut tracker, job.job_id, true);
            }
            _ => {}
        }
    }
}
