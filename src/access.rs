//! Role gating.
//!
//! Every screen that needs a signed-in identity or a specific role runs the
//! same check before fetching anything. The result is advisory; the API is
//! the real authorization boundary.

use crate::models::{User, UserRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Not signed in; the caller should offer the login view.
    SignedOut,
    /// Signed in with the wrong role; the caller renders the denial and a way
    /// back, no redirect.
    Denied {
        required: &'static [UserRole],
        actual: UserRole,
    },
}

pub fn check(user: Option<&User>, required: &'static [UserRole]) -> Access {
    let Some(user) = user else {
        return Access::SignedOut;
    };
    if required.is_empty() || required.contains(&user.role) {
        Access::Granted
    } else {
        Access::Denied { required, actual: user.role }
    }
}

/// Fixed denial message naming the required role(s) and the viewer's own.
pub fn denial_message(required: &[UserRole], actual: UserRole) -> String {
    let roles: Vec<&str> = required.iter().map(|r| r.as_str()).collect();
    format!(
        "Access denied. This screen requires role {}; you are signed in as {}.",
        roles.join(" or "),
        actual.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn user_with_role(role: UserRole) -> User {
        User {
            user_id: 1,
            name: "Sam".into(),
            surname: "Ortiz".into(),
            email: "sam@example.com".into(),
            phone: None,
            role,
            company_id: None,
            company_name: None,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            current_employment: None,
        }
    }

    #[test]
    fn test_anonymous_is_signed_out() {
        assert_eq!(check(None, &[UserRole::Admin]), Access::SignedOut);
    }

    #[test]
    fn test_matching_role_is_granted() {
        let user = user_with_role(UserRole::JobSeeker);
        assert_eq!(check(Some(&user), &[UserRole::JobSeeker]), Access::Granted);
    }

    #[test]
    fn test_wrong_role_is_denied_with_both_roles_named() {
        let user = user_with_role(UserRole::Employer);
        let access = check(Some(&user), &[UserRole::Admin]);
        assert_eq!(
            access,
            Access::Denied { required: &[UserRole::Admin], actual: UserRole::Employer }
        );
        if let Access::Denied { required, actual } = access {
            let message = denial_message(required, actual);
            assert!(message.contains("Admin"));
            assert!(message.contains("Employer"));
        }
    }

    #[test]
    fn test_empty_required_set_means_any_signed_in_user() {
        let user = user_with_role(UserRole::Unknown);
        assert_eq!(check(Some(&user), &[]), Access::Granted);
    }

    #[test]
    fn test_multiple_allowed_roles() {
        let allowed: &'static [UserRole] = &[UserRole::Admin, UserRole::Employer];
        let employer = user_with_role(UserRole::Employer);
        let seeker = user_with_role(UserRole::JobSeeker);
        assert_eq!(check(Some(&employer), allowed), Access::Granted);
        assert!(matches!(check(Some(&seeker), allowed), Access::Denied { .. }));
    }
}
