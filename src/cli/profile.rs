//! Profile screen: identity summary, contact edits, password change.

use anyhow::Result;
use chrono::Utc;

use crate::api::ApiClient;
use crate::cli::ui::FormResult;
use crate::cli::{display, require_role, ui};
use crate::models::User;
use crate::session::Session;

pub fn run_profile(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    // Any signed-in role may view its own profile
    if !require_role(api, session, &[])? {
        return Ok(());
    }

    loop {
        let Some(user) = session.user() else {
            return Ok(());
        };
        print_profile(user);

        let actions = ["Edit profile", "Change password", "Back"];
        let Some(idx) = ui::select("actions:", &actions)? else {
            return Ok(());
        };
        match actions[idx] {
            "Edit profile" => edit_profile(api, session)?,
            "Change password" => change_password(api)?,
            _ => return Ok(()),
        }
    }
}

fn print_profile(user: &User) {
    println!();
    println!("{} <{}>", user.full_name(), user.email);
    println!("Role: {}", user.role);
    if let Some(ref phone) = user.phone {
        println!("Phone: {}", phone);
    }
    if let Some(ref company) = user.company_name {
        println!("Company: {}", company);
    }
    if let Some(ref employment) = user.current_employment {
        let duration = display::employment_duration(&employment.start_date, &Utc::now());
        let mut line = format!(
            "Employed at {} ({}) for {}",
            employment.company_name, employment.department_name, duration
        );
        if let Some(ref location) = employment.company_location {
            line.push_str(&format!(" — {}", location));
        }
        println!("{}", line);
    }
    println!("Member since: {}", display::format_date(&user.created_at));
    println!();
}

fn edit_profile(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    let Some(user) = session.user() else {
        return Ok(());
    };

    let name = match ui::prompt_field("name", Some(&user.name))? {
        FormResult::Value(v) if !v.is_empty() => v,
        FormResult::Value(_) => {
            ui::warning("Name cannot be empty.");
            return Ok(());
        }
        FormResult::Cancelled => return Ok(()),
    };
    let surname = match ui::prompt_field("surname", Some(&user.surname))? {
        FormResult::Value(v) if !v.is_empty() => v,
        FormResult::Value(_) => {
            ui::warning("Surname cannot be empty.");
            return Ok(());
        }
        FormResult::Cancelled => return Ok(()),
    };
    let phone = match ui::prompt_field("phone", user.phone.as_deref())? {
        FormResult::Value(v) => Some(v).filter(|v| !v.is_empty()),
        FormResult::Cancelled => return Ok(()),
    };

    match api.update_profile(&name, &surname, phone.as_deref()) {
        Ok(updated) => {
            session.update_user(|u| {
                u.name = updated.name;
                u.surname = updated.surname;
                u.phone = updated.phone;
            })?;
            ui::status("Profile updated.");
        }
        Err(e) => ui::error(&e.to_string()),
    }
    Ok(())
}

fn change_password(api: &ApiClient) -> Result<()> {
    let Some(current) = ui::password_input("current password: ")? else {
        return Ok(());
    };
    if current.is_empty() {
        ui::warning("Current password is required.");
        return Ok(());
    }

    let new = loop {
        let Some(new) = ui::password_input("new password: ")? else {
            return Ok(());
        };
        if !ui::is_valid_password(&new) {
            ui::warning(&format!("Password must be at least {} characters.", ui::MIN_PASSWORD_LEN));
            continue;
        }
        if new == current {
            ui::warning("New password must differ from the current one.");
            continue;
        }
        break new;
    };
    ui::status(&format!("Strength: {}", password_strength(&new)));

    let Some(confirmation) = ui::password_input("confirm new password: ")? else {
        return Ok(());
    };
    if confirmation != new {
        ui::warning("Passwords do not match.");
        return Ok(());
    }

    match api.change_password(&current, &new) {
        Ok(()) => ui::status("Password changed."),
        Err(e) => ui::error(&e.to_string()),
    }
    Ok(())
}

/// Length-based strength label shown before the confirmation prompt.
fn password_strength(password: &str) -> &'static str {
    match password.len() {
        0..=5 => "Weak",
        6..=7 => "Fair",
        8..=11 => "Good",
        _ => "Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength_labels() {
        assert_eq!(password_strength("abc"), "Weak");
        assert_eq!(password_strength("abcdef"), "Fair");
        assert_eq!(password_strength("abcdefgh"), "Good");
        assert_eq!(password_strength("abcdefghijkl"), "Strong");
    }
}
