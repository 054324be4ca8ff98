//! CV management screen (job seekers).

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::ui::FormResult;
use crate::cli::{display, require_role, ui};
use crate::models::{Cv, CvForm, Skill, UserRole};
use crate::session::Session;
use crate::tracker::RequestTracker;

const ALLOWED: &[UserRole] = &[UserRole::JobSeeker];

pub fn run_cv(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if !require_role(api, session, ALLOWED)? {
        return Ok(());
    }

    // Skill picker contents; an empty list just means free-text skills only
    let skills = match api.skills() {
        Ok(skills) => skills,
        Err(e) => {
            ui::warning(&e.to_string());
            Vec::new()
        }
    };

    let mut tracker = RequestTracker::new();
    loop {
        let cvs = match api.cvs() {
            Ok(cvs) => cvs,
            Err(e) => {
                ui::error(&e.to_string());
                return Ok(());
            }
        };

        let mut options: Vec<String> = cvs.iter().map(display::cv_row).collect();
        options.push("Create CV".into());
        options.push("Back".into());

        let Some(idx) = ui::select("your CVs:", &options)? else {
            return Ok(());
        };
        if idx == cvs.len() {
            if let Some(form) = cv_form(&skills, None)? {
                match api.create_cv(&form) {
                    Ok(()) => ui::status("CV created."),
                    Err(e) => ui::error(&e.to_string()),
                }
            }
            continue;
        }
        if idx == cvs.len() + 1 {
            return Ok(());
        }

        cv_actions(api, &skills, &cvs[idx], &mut tracker)?;
    }
}

fn cv_actions(
    api: &ApiClient,
    skills: &[Skill],
    cv: &Cv,
    tracker: &mut RequestTracker,
) -> Result<()> {
    println!();
    display::print_cv_detail(cv);
    println!();

    let actions = ["Edit", "Delete", "Back"];
    let Some(idx) = ui::select("actions:", &actions)? else {
        return Ok(());
    };
    match actions[idx] {
        "Edit" => {
            if let Some(form) = cv_form(skills, Some(cv))? {
                match api.update_cv(cv.cv_id, &form) {
                    Ok(()) => ui::status("CV updated."),
                    Err(e) => ui::error(&e.to_string()),
                }
            }
        }
        "Delete" => {
            if !ui::confirm("Delete this CV? This action cannot be undone.")? {
                return Ok(());
            }
            if !tracker.begin(cv.cv_id) {
                ui::warning("A request for this CV is already in progress.");
                return Ok(());
            }
            match api.delete_cv(cv.cv_id) {
                Ok(()) => {
                    tracker.finish(cv.cv_id);
                    ui::status("CV deleted.");
                }
                Err(e) => {
                    let message = e.to_string();
                    tracker.fail(cv.cv_id, message.clone());
                    ui::error(&message);
                }
            }
        }
        _ => {}
    }
    Ok(())
}

/// Interactive CV form, prefilled from `current` when editing. Returns None
/// when cancelled.
fn cv_form(skills: &[Skill], current: Option<&Cv>) -> Result<Option<CvForm>> {
    let summary = match ui::prompt_field("summary", current.and_then(|c| c.summary.as_deref()))? {
        FormResult::Value(v) => v,
        FormResult::Cancelled => return Ok(None),
    };

    let years_current = current
        .and_then(|c| c.experience_years)
        .map(|y| y.to_string());
    let experience_years = loop {
        match ui::prompt_field("experience years", years_current.as_deref())? {
            FormResult::Cancelled => return Ok(None),
            FormResult::Value(v) if v.is_empty() => break None,
            FormResult::Value(v) => match v.parse::<i32>() {
                Ok(years) => break Some(years),
                Err(_) => ui::warning("Enter a whole number of years, or leave blank."),
            },
        }
    };

    let education_level =
        match ui::prompt_field("education level", current.and_then(|c| c.education_level.as_deref()))? {
            FormResult::Value(v) => v,
            FormResult::Cancelled => return Ok(None),
        };

    let skills_text =
        match ui::prompt_field("other skills", current.and_then(|c| c.skills_text.as_deref()))? {
            FormResult::Value(v) => v,
            FormResult::Cancelled => return Ok(None),
        };

    let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
    let Some(chosen) = ui::multi_select("skills:", &names)? else {
        return Ok(None);
    };
    let skill_ids = chosen.iter().map(|&i| skills[i].skill_id).collect();

    Ok(Some(CvForm {
        summary,
        experience_years,
        education_level,
        skills_text,
        skill_ids,
    }))
}
