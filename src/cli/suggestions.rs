//! Ranked job suggestions for one of the seeker's CVs.

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::jobs::{apply_to_job, toggle_favorite};
use crate::cli::{display, require_role, ui};
use crate::models::UserRole;
use crate::session::Session;
use crate::suggest::{suggest_jobs, JobSuggestion};
use crate::tracker::RequestTracker;

const ALLOWED: &[UserRole] = &[UserRole::JobSeeker];

pub fn run_suggestions(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if !require_role(api, session, ALLOWED)? {
        return Ok(());
    }

    let mut cvs = match api.cvs() {
        Ok(cvs) => cvs,
        Err(e) => {
            ui::error(&e.to_string());
            return Ok(());
        }
    };
    if cvs.is_empty() {
        ui::status("Create a CV first to get job suggestions.");
        return Ok(());
    }

    // Most recent CV first so it is the default pick
    cvs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let cv = if cvs.len() == 1 {
        &cvs[0]
    } else {
        let rows: Vec<String> = cvs.iter().map(display::cv_row).collect();
        let Some(idx) = ui::select("match against which CV:", &rows)? else {
            return Ok(());
        };
        &cvs[idx]
    };

    let jobs = match api.jobs(None) {
        Ok(jobs) => jobs,
        Err(e) => {
            ui::error(&e.to_string());
            return Ok(());
        }
    };

    let mut suggestions = suggest_jobs(&jobs, cv);
    if suggestions.is_empty() {
        ui::status("No suggestions right now. You have applied to every open job.");
        return Ok(());
    }

    let mut tracker = RequestTracker::new();
    loop {
        let mut options: Vec<String> = suggestions.iter().map(suggestion_row).collect();
        options.push("Back".into());

        let Some(idx) = ui::select("suggested jobs:", &options)? else {
            return Ok(());
        };
        if idx == suggestions.len() {
            return Ok(());
        }

        if let Some(action) = suggestion_actions(api, &suggestions[idx], &mut tracker)? {
            match action {
                Action::Applied => {
                    // Applied jobs drop out of the ranking
                    suggestions.remove(idx);
                    if suggestions.is_empty() {
                        return Ok(());
                    }
                }
                Action::FavoriteToggled => {
                    let job = &mut suggestions[idx].job;
                    job.is_favorited = !job.is_favorited;
                }
            }
        }
    }
}

enum Action {
    Applied,
    FavoriteToggled,
}

fn suggestion_row(s: &JobSuggestion) -> String {
    format!(
        "[{:>3}%] {} — {} ({})",
        s.match_percentage, s.job.title, s.job.company_name, s.reason_for_suggestion
    )
}

fn suggestion_actions(
    api: &ApiClient,
    suggestion: &JobSuggestion,
    tracker: &mut RequestTracker,
) -> Result<Option<Action>> {
    let job = &suggestion.job;
    println!();
    display::print_job_detail(job);
    println!();
    println!(
        "Match: {}% ({} of {} skills) — {}",
        suggestion.match_percentage,
        suggestion.match_score,
        suggestion.total_skills_required,
        suggestion.reason_for_suggestion
    );
    if !suggestion.matching_skills.is_empty() {
        println!("Matching skills: {}", suggestion.matching_skills.join(", "));
    }
    println!();

    let mut actions: Vec<&str> = Vec::new();
    if !job.filled() {
        actions.push("Apply");
    }
    actions.push(if job.is_favorited { "Remove favorite" } else { "Add favorite" });
    actions.push("Back");

    let Some(idx) = ui::select("actions:", &actions)? else {
        return Ok(None);
    };
    match actions[idx] {
        "Apply" => {
            if apply_to_job(api, tracker, job.job_id) {
                return Ok(Some(Action::Applied));
            }
        }
        "Add favorite" | "Remove favorite" => {
            if toggle_favorite(api, tracker, job.job_id, job.is_favorited) {
                return Ok(Some(Action::FavoriteToggled));
            }
        }
        _ => {}
    }
    Ok(None)
}
