//! Session/identity holder.
//!
//! Two values persist between runs, under fixed names in the data directory:
//! the opaque bearer token (`token`) and a JSON snapshot of the signed-in
//! user (`user.json`). Both are written on login/register, rewritten on
//! profile updates, and removed on logout. A snapshot that fails to parse is
//! discarded and the session starts anonymous; that is never an error.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::{ApiClient, AuthResponse};
use crate::models::User;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

pub struct Session {
    dir: PathBuf,
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// Read any persisted session from `dir`. Missing or corrupt state means
    /// anonymous; the token is only honored when the user snapshot is intact.
    pub fn load(dir: &Path) -> Self {
        let token = fs::read_to_string(dir.join(TOKEN_FILE))
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let user = match fs::read_to_string(dir.join(USER_FILE)) {
            Ok(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(_) => {
                    // Self-heal: drop the corrupt snapshot
                    let _ = fs::remove_file(dir.join(USER_FILE));
                    None
                }
            },
            Err(_) => None,
        };

        let token = if user.is_some() { token } else { None };
        Self { dir: dir.to_path_buf(), token, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn login(&mut self, api: &mut ApiClient, email: &str, password: &str) -> Result<&User> {
        let auth = api.login(email, password)?;
        self.establish(api, auth)
    }

    pub fn register(
        &mut self,
        api: &mut ApiClient,
        request: &crate::api::RegisterRequest,
    ) -> Result<&User> {
        let auth = api.register(request)?;
        self.establish(api, auth)
    }

    fn establish(&mut self, api: &mut ApiClient, auth: AuthResponse) -> Result<&User> {
        self.persist(&auth.token, &auth.user)?;
        api.set_token(auth.token.clone());
        self.token = Some(auth.token);
        Ok(self.user.insert(auth.user))
    }

    /// Clear the session. Failure to remove the files is swallowed; the
    /// in-memory state transitions to anonymous regardless.
    pub fn logout(&mut self, api: &mut ApiClient) {
        let _ = fs::remove_file(self.dir.join(TOKEN_FILE));
        let _ = fs::remove_file(self.dir.join(USER_FILE));
        api.clear_token();
        self.token = None;
        self.user = None;
    }

    /// Shallow-merge changes into the signed-in user and re-persist the
    /// snapshot. No-op when anonymous.
    pub fn update_user(&mut self, apply: impl FnOnce(&mut User)) -> Result<()> {
        let Some(ref mut user) = self.user else {
            return Ok(());
        };
        apply(user);
        let raw = serde_json::to_string(user)?;
        fs::write(self.dir.join(USER_FILE), raw)?;
        Ok(())
    }

    fn persist(&self, token: &str, user: &User) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(TOKEN_FILE), token)?;
        fs::write(self.dir.join(USER_FILE), serde_json::to_string(user)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn sample_user() -> User {
        User {
            user_id: 1,
            name: "Ada".into(),
            surname: "Park".into(),
            email: "ada@example.com".into(),
            phone: None,
            role: UserRole::JobSeeker,
            company_id: None,
            company_name: None,
            created_at: "2024-03-01T09:00:00Z".parse().unwrap(),
            current_employment: None,
        }
    }

    #[test]
    fn test_load_from_empty_dir_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::load(dir.path());
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session {
            dir: dir.path().to_path_buf(),
            token: None,
            user: None,
        };
        session.persist("tok-123", &sample_user()).unwrap();

        let restored = Session::load(dir.path());
        assert!(restored.is_authenticated());
        assert_eq!(restored.token(), Some("tok-123"));
        assert_eq!(restored.user().unwrap().email, "ada@example.com");
    }

    #[test]
    fn test_corrupt_snapshot_self_heals() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TOKEN_FILE), "tok-123").unwrap();
        fs::write(dir.path().join(USER_FILE), "{not json").unwrap();

        let session = Session::load(dir.path());
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        // The corrupt file is gone, so the next load stays clean
        assert!(!dir.path().join(USER_FILE).exists());
    }

    #[test]
    fn test_token_without_user_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TOKEN_FILE), "orphan").unwrap();
        let session = Session::load(dir.path());
        assert!(session.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_update_user_merges_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session {
            dir: dir.path().to_path_buf(),
            token: Some("tok".into()),
            user: Some(sample_user()),
        };
        session.persist("tok", &sample_user()).unwrap();
        session
            .update_user(|u| {
                u.name = "Adaline".into();
                u.phone = Some("555-0101".into());
            })
            .unwrap();

        let restored = Session::load(dir.path());
        let user = restored.user().unwrap();
        assert_eq!(user.name, "Adaline");
        assert_eq!(user.phone.as_deref(), Some("555-0101"));
        // Untouched fields survive the merge
        assert_eq!(user.surname, "Park");
    }

    #[test]
    fn test_update_user_without_session_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::load(dir.path());
        session.update_user(|u| u.name = "ghost".into()).unwrap();
        assert!(!dir.path().join(USER_FILE).exists());
    }
}
