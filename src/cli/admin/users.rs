//! User management for admins.

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::{display, require_role, ui};
use crate::models::admin::CreateUserForm;
use crate::models::{User, UserRole};
use crate::session::Session;
use crate::tracker::RequestTracker;

const ALLOWED: &[UserRole] = &[UserRole::Admin];
const ASSIGNABLE: [UserRole; 3] = [UserRole::JobSeeker, UserRole::Employer, UserRole::Admin];

pub fn run_users(
    api: &mut ApiClient,
    session: &mut Session,
    search: Option<String>,
    role: Option<String>,
) -> Result<()> {
    if !require_role(api, session, ALLOWED)? {
        return Ok(());
    }

    let mut search = search.filter(|s| !s.is_empty());
    let mut role_filter = match role.as_deref() {
        Some(name) => match UserRole::parse(name) {
            UserRole::Unknown => {
                ui::warning(&format!("Unknown role '{}', showing all users.", name));
                None
            }
            parsed => Some(parsed),
        },
        None => None,
    };

    let mut tracker = RequestTracker::new();
    loop {
        let users = match api.admin_users(search.as_deref(), role_filter) {
            Ok(users) => users,
            Err(e) => {
                ui::error(&e.to_string());
                return Ok(());
            }
        };

        let mut options: Vec<String> = users.iter().map(user_row).collect();
        options.push("Create user".into());
        options.push("Search…".into());
        options.push("Filter by role…".into());
        options.push("Back".into());

        let Some(idx) = ui::select("users:", &options)? else {
            return Ok(());
        };
        match idx.checked_sub(users.len()) {
            Some(0) => {
                if let Some(form) = create_user_form(api)? {
                    match api.admin_create_user(&form) {
                        Ok(()) => ui::status("User created."),
                        Err(e) => ui::error(&e.to_string()),
                    }
                }
            }
            Some(1) => {
                search = ui::text_input("search: ", search.as_deref())?
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());
            }
            Some(2) => {
                let mut labels: Vec<&str> = vec!["All"];
                labels.extend(ASSIGNABLE.iter().map(|r| r.as_str()));
                if let Some(pick) = ui::select("show:", &labels)? {
                    role_filter = if pick == 0 { None } else { Some(ASSIGNABLE[pick - 1]) };
                }
            }
            Some(_) => return Ok(()),
            None => user_actions(api, session, &users[idx], &mut tracker)?,
        }
    }
}

fn user_row(user: &User) -> String {
    let mut row = format!("{} <{}> — {}", user.full_name(), user.email, user.role);
    if let Some(ref company) = user.company_name {
        row.push_str(&format!(" @ {}", company));
    }
    row.push_str(&format!(" ({})", display::format_date(&user.created_at)));
    row
}

fn user_actions(
    api: &ApiClient,
    session: &Session,
    user: &User,
    tracker: &mut RequestTracker,
) -> Result<()> {
    let is_self = session.user().map(|u| u.user_id == user.user_id).unwrap_or(false);

    println!();
    println!("{}", user_row(user));
    if let Some(ref phone) = user.phone {
        println!("Phone: {}", phone);
    }
    println!();

    let mut actions: Vec<&str> = Vec::new();
    if !is_self {
        actions.push("Change role");
        actions.push("Delete");
    }
    actions.push("Back");

    let Some(idx) = ui::select("actions:", &actions)? else {
        return Ok(());
    };
    match actions[idx] {
        "Change role" => {
            let labels: Vec<&str> = ASSIGNABLE.iter().map(|r| r.as_str()).collect();
            let Some(pick) = ui::select("new role:", &labels)? else {
                return Ok(());
            };
            let new_role = ASSIGNABLE[pick];
            if new_role == user.role {
                return Ok(());
            }
            if !tracker.begin(user.user_id) {
                ui::warning("A request for this user is already in progress.");
                return Ok(());
            }
            match api.admin_update_user_role(user.user_id, new_role) {
                Ok(()) => {
                    tracker.finish(user.user_id);
                    ui::status(&format!("{} is now {}.", user.full_name(), new_role));
                }
                Err(e) => {
                    let message = e.to_string();
                    tracker.fail(user.user_id, message.clone());
                    ui::error(&message);
                }
            }
        }
        "Delete" => {
            let prompt = format!(
                "Delete {} <{}>? This cannot be undone.",
                user.full_name(),
                user.email
            );
            if !ui::confirm(&prompt)? {
                return Ok(());
            }
            if !tracker.begin(user.user_id) {
                ui::warning("A request for this user is already in progress.");
                return Ok(());
            }
            match api.admin_delete_user(user.user_id) {
                Ok(()) => {
                    tracker.finish(user.user_id);
                    ui::status("User deleted.");
                }
                Err(e) => {
                    let message = e.to_string();
                    tracker.fail(user.user_id, message.clone());
                    ui::error(&message);
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn create_user_form(api: &ApiClient) -> Result<Option<CreateUserForm>> {
    let Some(name) = ui::text_input("name: ", None)? else { return Ok(None) };
    let Some(surname) = ui::text_input("surname: ", None)? else { return Ok(None) };
    let Some(email) = ui::text_input("email: ", None)? else { return Ok(None) };
    let email = email.trim().to_string();
    if !ui::is_valid_email(&email) {
        ui::error(&format!("Invalid email format: {}", email));
        return Ok(None);
    }
    let password = loop {
        let Some(password) = ui::password_input("password: ")? else { return Ok(None) };
        if ui::is_valid_password(&password) {
            break password;
        }
        ui::warning(&format!("Password must be at least {} characters.", ui::MIN_PASSWORD_LEN));
    };
    let Some(phone) = ui::text_input("phone (optional): ", None)? else { return Ok(None) };
    let phone = Some(phone.trim().to_string()).filter(|p| !p.is_empty());

    let labels: Vec<&str> = ASSIGNABLE.iter().map(|r| r.as_str()).collect();
    let Some(pick) = ui::select("role:", &labels)? else {
        return Ok(None);
    };
    let role = ASSIGNABLE[pick];

    let company_id = if role == UserRole::Employer {
        let companies = match api.admin_companies() {
            Ok(companies) => companies,
            Err(e) => {
                ui::error(&e.to_string());
                return Ok(None);
            }
        };
        if companies.is_empty() {
            ui::status("Create a company first; employers must belong to one.");
            return Ok(None);
        }
        let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
        let Some(idx) = ui::select("company:", &names)? else {
            return Ok(None);
        };
        Some(companies[idx].company_id)
    } else {
        None
    };

    Ok(Some(CreateUserForm {
        name: name.trim().to_string(),
        surname: surname.trim().to_string(),
        email,
        phone,
        password,
        role,
        company_id,
    }))
}
