//! Local session handling
//!
//! Resolves the acting user. `current_user()` returning `None` means "not
//! authenticated" — which callers must treat as a well-defined empty state,
//! never as an error. The session is resolved once at the top of a command
//! and the owner id is threaded through explicitly from there.

use std::path::PathBuf;

use crate::error::PocketbookError;
use crate::models::UserId;

/// Serializable session file contents
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<UserId>,
}

/// The local login session
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the currently logged-in user, if any
    pub fn current_user(&self) -> Result<Option<UserId>, PocketbookError> {
        let data: SessionData = super::file_io::read_json(&self.path)?;
        Ok(data.user_id)
    }

    /// Log a user in
    pub fn login(&self, user_id: UserId) -> Result<(), PocketbookError> {
        let data = SessionData {
            user_id: Some(user_id),
        };
        super::file_io::write_json_atomic(&self.path, &data)
    }

    /// Log out
    pub fn logout(&self) -> Result<(), PocketbookError> {
        let data = SessionData { user_id: None };
        super::file_io::write_json_atomic(&self.path, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_session_means_no_user() {
        let temp_dir = TempDir::new().unwrap();
        let session = SessionStore::new(temp_dir.path().join("session.json"));

        assert!(session.current_user().unwrap().is_none());
    }

    #[test]
    fn test_login_logout() {
        let temp_dir = TempDir::new().unwrap();
        let session = SessionStore::new(temp_dir.path().join("session.json"));

        let user = UserId::new();
        session.login(user).unwrap();
        assert_eq!(session.current_user().unwrap(), Some(user));

        session.logout().unwrap();
        assert!(session.current_user().unwrap().is_none());
    }
}
