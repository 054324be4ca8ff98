//! Company management for admins.

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::ui::FormResult;
use crate::cli::{require_role, ui};
use crate::models::{Company, CompanyForm, Sector, UserRole};
use crate::session::Session;
use crate::tracker::RequestTracker;

const ALLOWED: &[UserRole] = &[UserRole::Admin];

pub fn run_companies(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if !require_role(api, session, ALLOWED)? {
        return Ok(());
    }

    let sectors = match api.admin_sectors() {
        Ok(sectors) => sectors,
        Err(e) => {
            ui::error(&e.to_string());
            return Ok(());
        }
    };

    let mut tracker = RequestTracker::new();
    loop {
        let companies = match api.admin_companies() {
            Ok(companies) => companies,
            Err(e) => {
                ui::error(&e.to_string());
                return Ok(());
            }
        };

        let mut options: Vec<String> = companies.iter().map(company_row).collect();
        options.push("Create company".into());
        options.push("Back".into());

        let Some(idx) = ui::select("companies:", &options)? else {
            return Ok(());
        };
        if idx == companies.len() {
            if let Some(form) = company_form(&sectors, None)? {
                match api.admin_create_company(&form) {
                    Ok(()) => ui::status("Company created."),
                    Err(e) => ui::error(&e.to_string()),
                }
            }
            continue;
        }
        if idx == companies.len() + 1 {
            return Ok(());
        }

        company_actions(api, &sectors, &companies[idx], &mut tracker)?;
    }
}

fn company_row(company: &Company) -> String {
    let mut row = format!("{} — {}", company.name, company.sector_name);
    if let Some(ref location) = company.location {
        row.push_str(&format!(" ({})", location));
    }
    row.push_str(&format!(
        "  [{} employees, {} jobs]",
        company.employee_count, company.job_count
    ));
    row
}

fn company_actions(
    api: &ApiClient,
    sectors: &[Sector],
    company: &Company,
    tracker: &mut RequestTracker,
) -> Result<()> {
    println!();
    println!("{}", company_row(company));
    if let Some(ref description) = company.description {
        println!("{}", description);
    }
    println!();

    let actions = ["Edit", "Delete", "Back"];
    let Some(idx) = ui::select("actions:", &actions)? else {
        return Ok(());
    };
    match actions[idx] {
        "Edit" => {
            if let Some(form) = company_form(sectors, Some(company))? {
                match api.admin_update_company(company.company_id, &form) {
                    Ok(()) => ui::status("Company updated."),
                    Err(e) => ui::error(&e.to_string()),
                }
            }
        }
        "Delete" => {
            let prompt = format!(
                "Delete \"{}\"? Its employees, jobs, and applications go with it.",
                company.name
            );
            if !ui::confirm(&prompt)? {
                return Ok(());
            }
            if !tracker.begin(company.company_id) {
                ui::warning("A request for this company is already in progress.");
                return Ok(());
            }
            match api.admin_delete_company(company.company_id) {
                Ok(()) => {
                    tracker.finish(company.company_id);
                    ui::status("Company deleted.");
                }
                Err(e) => {
                    let message = e.to_string();
                    tracker.fail(company.company_id, message.clone());
                    ui::error(&message);
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn company_form(sectors: &[Sector], current: Option<&Company>) -> Result<Option<CompanyForm>> {
    let name = loop {
        match ui::prompt_field("name", current.map(|c| c.name.as_str()))? {
            FormResult::Cancelled => return Ok(None),
            FormResult::Value(v) if v.is_empty() => ui::warning("Name is required."),
            FormResult::Value(v) => break v,
        }
    };
    let description =
        match ui::prompt_field("description", current.and_then(|c| c.description.as_deref()))? {
            FormResult::Value(v) => Some(v).filter(|v| !v.is_empty()),
            FormResult::Cancelled => return Ok(None),
        };
    let location = match ui::prompt_field("location", current.and_then(|c| c.location.as_deref()))? {
        FormResult::Value(v) => Some(v).filter(|v| !v.is_empty()),
        FormResult::Cancelled => return Ok(None),
    };

    let names: Vec<&str> = sectors.iter().map(|s| s.name.as_str()).collect();
    let Some(idx) = ui::select("sector:", &names)? else {
        return Ok(None);
    };
    let sector_id = sectors[idx].sector_id;

    Ok(Some(CompanyForm {
        name,
        description,
        location,
        sector_id,
    }))
}
