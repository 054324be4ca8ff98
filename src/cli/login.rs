//! Sign-in, registration, and sign-out screens.

use anyhow::Result;

use crate::api::{ApiClient, RegisterRequest};
use crate::cli::ui;
use crate::models::{Company, UserRole};
use crate::session::Session;

pub fn run_login(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if let Some(user) = session.user() {
        ui::status(&format!("Already signed in as {}.", user.full_name()));
        return Ok(());
    }

    let Some(email) = ui::text_input("email: ", None)? else {
        return Ok(());
    };
    let Some(password) = ui::password_input("password: ")? else {
        return Ok(());
    };

    match session.login(api, email.trim(), &password) {
        Ok(user) => {
            ui::status(&format!("Signed in as {} ({}).", user.full_name(), user.role));
        }
        Err(e) => ui::error(&e.to_string()),
    }
    Ok(())
}

pub fn run_register(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if session.user().is_some() {
        ui::status("Already signed in. Log out first to register a new account.");
        return Ok(());
    }

    let Some(name) = ui::text_input("name: ", None)? else { return Ok(()) };
    let Some(surname) = ui::text_input("surname: ", None)? else { return Ok(()) };
    let Some(email) = ui::text_input("email: ", None)? else { return Ok(()) };
    let email = email.trim().to_string();
    if !ui::is_valid_email(&email) {
        ui::error(&format!("Invalid email format: {}", email));
        return Ok(());
    }
    let password = loop {
        let Some(password) = ui::password_input("password: ")? else { return Ok(()) };
        if ui::is_valid_password(&password) {
            break password;
        }
        ui::warning(&format!("Password must be at least {} characters.", ui::MIN_PASSWORD_LEN));
    };
    let Some(phone) = ui::text_input("phone (optional): ", None)? else { return Ok(()) };
    let phone = Some(phone.trim().to_string()).filter(|p| !p.is_empty());

    let roles = [UserRole::JobSeeker, UserRole::Employer];
    let Some(role_idx) = ui::select("account type:", &roles.map(|r| r.as_str()))? else {
        return Ok(());
    };
    let role = roles[role_idx];

    // Employers must belong to an existing company
    let company_id = if role == UserRole::Employer {
        match pick_company(api)? {
            Some(id) => Some(id),
            None => return Ok(()),
        }
    } else {
        None
    };

    let request = RegisterRequest {
        name: name.trim().to_string(),
        surname: surname.trim().to_string(),
        email,
        password,
        phone,
        role,
        company_id,
    };

    match session.register(api, &request) {
        Ok(user) => {
            ui::status(&format!("Welcome, {}! Your account is ready.", user.full_name()));
        }
        Err(e) => ui::error(&e.to_string()),
    }
    Ok(())
}

fn pick_company(api: &ApiClient) -> Result<Option<i64>> {
    let companies: Vec<Company> = match api.companies() {
        Ok(companies) => companies,
        Err(e) => {
            ui::error(&e.to_string());
            return Ok(None);
        }
    };
    if companies.is_empty() {
        ui::status("No companies available. Please contact an admin to register your company.");
        return Ok(None);
    }

    let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
    let Some(idx) = ui::select("company:", &names)? else {
        return Ok(None);
    };
    Ok(Some(companies[idx].company_id))
}

pub fn run_logout(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if session.user().is_none() {
        ui::status("Not signed in.");
        return Ok(());
    }
    session.logout(api);
    ui::status("Signed out.");
    Ok(())
}
