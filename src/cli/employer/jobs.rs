//! Job posting management for employers.

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::ui::FormResult;
use crate::cli::{display, require_role, ui};
use crate::models::{Department, Job, JobForm, Skill, UserRole};
use crate::session::Session;
use crate::tracker::RequestTracker;

const ALLOWED: &[UserRole] = &[UserRole::Employer];

pub fn run_employer_jobs(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if !require_role(api, session, ALLOWED)? {
        return Ok(());
    }

    let skills = match api.skills() {
        Ok(skills) => skills,
        Err(e) => {
            ui::warning(&e.to_string());
            Vec::new()
        }
    };
    let departments = match api.departments() {
        Ok(departments) => departments,
        Err(e) => {
            ui::error(&e.to_string());
            return Ok(());
        }
    };

    let mut tracker = RequestTracker::new();
    loop {
        let jobs = match fetch_company_jobs(api, session) {
            Ok(jobs) => jobs,
            Err(e) => {
                ui::error(&e.to_string());
                return Ok(());
            }
        };

        let mut options: Vec<String> = jobs
            .iter()
            .map(|job| display::job_row_with_error(job, tracker.error(job.job_id)))
            .collect();
        options.push("Post a job".into());
        options.push("Back".into());

        let Some(idx) = ui::select("your postings:", &options)? else {
            return Ok(());
        };
        if idx == jobs.len() {
            if let Some(form) = job_form(&skills, &departments, None)? {
                match api.create_job(&form) {
                    Ok(()) => ui::status("Job posted."),
                    Err(e) => ui::error(&e.to_string()),
                }
            }
            continue;
        }
        if idx == jobs.len() + 1 {
            return Ok(());
        }

        job_actions(api, &skills, &departments, &jobs[idx], &mut tracker)?;
    }
}

/// The dedicated employer listing, falling back to the public listing
/// filtered by the employer's company when the endpoint is unavailable.
fn fetch_company_jobs(api: &ApiClient, session: &Session) -> Result<Vec<Job>> {
    match api.employer_jobs() {
        Ok(jobs) => Ok(jobs),
        Err(_) => {
            let company = session.user().and_then(|u| u.company_name.clone());
            let jobs = api.jobs(None)?;
            Ok(jobs
                .into_iter()
                .filter(|job| Some(&job.company_name) == company.as_ref())
                .collect())
        }
    }
}

fn job_actions(
    api: &ApiClient,
    skills: &[Skill],
    departments: &[Department],
    job: &Job,
    tracker: &mut RequestTracker,
) -> Result<()> {
    println!();
    display::print_job_detail(job);
    println!();

    let actions = ["Edit", "Delete", "Back"];
    let Some(idx) = ui::select("actions:", &actions)? else {
        return Ok(());
    };
    match actions[idx] {
        "Edit" => {
            if !job.editable() {
                ui::status("Cannot edit filled positions.");
                return Ok(());
            }
            if let Some(form) = job_form(skills, departments, Some(job))? {
                match api.update_job(job.job_id, &form) {
                    Ok(()) => ui::status("Job updated."),
                    Err(e) => ui::error(&e.to_string()),
                }
            }
        }
        "Delete" => {
            if !job.editable() {
                ui::status("Cannot delete filled positions.");
                return Ok(());
            }
            let prompt = format!(
                "Delete \"{}\"? This will also remove all applications for it.",
                job.title
            );
            if !ui::confirm(&prompt)? {
                return Ok(());
            }
            if !tracker.begin(job.job_id) {
                ui::warning("A request for this job is already in progress.");
                return Ok(());
            }
            match api.delete_job(job.job_id) {
                Ok(()) => {
                    tracker.finish(job.job_id);
                    ui::status("Job deleted.");
                }
                Err(e) => {
                    let message = e.to_string();
                    tracker.fail(job.job_id, message.clone());
                    ui::error(&message);
                }
            }
        }
        _ => {}
    }
    Ok(())
}

/// Interactive posting form, prefilled from `current` when editing. Returns
/// None when cancelled.
fn job_form(
    skills: &[Skill],
    departments: &[Department],
    current: Option<&Job>,
) -> Result<Option<JobForm>> {
    let title = loop {
        match ui::prompt_field("title", current.map(|j| j.title.as_str()))? {
            FormResult::Cancelled => return Ok(None),
            FormResult::Value(v) if v.is_empty() => ui::warning("Title is required."),
            FormResult::Value(v) => break v,
        }
    };
    let description = loop {
        match ui::prompt_field("description", current.map(|j| j.description.as_str()))? {
            FormResult::Cancelled => return Ok(None),
            FormResult::Value(v) if v.is_empty() => ui::warning("Description is required."),
            FormResult::Value(v) => break v,
        }
    };
    let location = match ui::prompt_field("location", current.and_then(|j| j.location.as_deref()))? {
        FormResult::Value(v) => Some(v).filter(|v| !v.is_empty()),
        FormResult::Cancelled => return Ok(None),
    };

    let Some(salary_min) = salary_field("salary min", current.and_then(|j| j.salary_min))? else {
        return Ok(None);
    };
    let Some(salary_max) = salary_field("salary max", current.and_then(|j| j.salary_max))? else {
        return Ok(None);
    };
    if let (Some(min), Some(max)) = (salary_min, salary_max) {
        if min > max {
            ui::warning("Salary minimum exceeds the maximum.");
            return Ok(None);
        }
    }

    let names: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
    let Some(dept_idx) = ui::select("department:", &names)? else {
        return Ok(None);
    };
    let department_id = departments[dept_idx].department_id;

    let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
    let Some(chosen) = ui::multi_select("required skills:", &names)? else {
        return Ok(None);
    };
    let skill_ids = chosen.iter().map(|&i| skills[i].skill_id).collect();

    Ok(Some(JobForm {
        title,
        description,
        location,
        salary_min,
        salary_max,
        department_id,
        skill_ids,
    }))
}

/// Optional salary amount. Outer None means the form was cancelled, inner
/// None means the field was left blank.
fn salary_field(field: &str, current: Option<f64>) -> Result<Option<Option<f64>>> {
    let current = current.map(|v| v.to_string());
    loop {
        match ui::prompt_field(field, current.as_deref())? {
            FormResult::Cancelled => return Ok(None),
            FormResult::Value(v) if v.is_empty() => return Ok(Some(None)),
            FormResult::Value(v) => match v.parse::<f64>() {
                Ok(amount) if amount >= 0.0 => return Ok(Some(Some(amount))),
                _ => ui::warning("Enter a non-negative amount, or leave blank."),
            },
        }
    }
}
