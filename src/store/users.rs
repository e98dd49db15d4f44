//! User repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{User, UserId};

/// Serializable user file contents
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    #[serde(default)]
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    users: RwLock<HashMap<UserId, User>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: UserData = super::file_io::read_json(&self.path)?;

        let mut users = self
            .users
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        users.clear();
        for user in file_data.users {
            users.insert(user.id, user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let users = self
            .users
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = users.values().cloned().collect();
        list.sort_by(|a, b| a.email.cmp(&b.email));

        let file_data = UserData { users: list };
        super::file_io::write_json_atomic(&self.path, &file_data)
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> Result<Option<User>, PocketbookError> {
        let users = self
            .users
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(users.get(&id).cloned())
    }

    /// Get a user by email (case-insensitive)
    pub fn get_by_email(&self, email: &str) -> Result<Option<User>, PocketbookError> {
        let users = self
            .users
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let needle = email.trim().to_lowercase();
        Ok(users
            .values()
            .find(|u| u.email.trim().to_lowercase() == needle)
            .cloned())
    }

    /// Get all users, sorted by email
    pub fn get_all(&self) -> Result<Vec<User>, PocketbookError> {
        let users = self
            .users
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = users.values().cloned().collect();
        list.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(list)
    }

    /// Insert or update a user
    pub fn upsert(&self, user: User) -> Result<(), PocketbookError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        users.insert(user.id, user);
        Ok(())
    }

    /// Count users
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let users = self
            .users
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, UserRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let repo = UserRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_get_by_email_normalizes() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(User::new("Ana@Example.com")).unwrap();
        assert!(repo.get_by_email("ana@example.com").unwrap().is_some());
        assert!(repo.get_by_email("other@example.com").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let user = User::new("ana@example.com");
        let id = user.id;
        repo.upsert(user).unwrap();
        repo.save().unwrap();

        let repo2 = UserRepository::new(temp_dir.path().join("users.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().email, "ana@example.com");
    }
}
