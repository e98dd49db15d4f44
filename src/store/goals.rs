//! Savings goal repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{GoalId, SavingsGoal, UserId};

/// Serializable goal file contents
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    #[serde(default)]
    goals: Vec<SavingsGoal>,
}

/// Repository for savings goal persistence
pub struct GoalRepository {
    path: PathBuf,
    goals: RwLock<HashMap<GoalId, SavingsGoal>>,
}

impl GoalRepository {
    /// Create a new goal repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            goals: RwLock::new(HashMap::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: GoalData = super::file_io::read_json(&self.path)?;

        let mut goals = self
            .goals
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        goals.clear();
        for goal in file_data.goals {
            goals.insert(goal.id, goal);
        }

        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = goals.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = GoalData { goals: list };
        super::file_io::write_json_atomic(&self.path, &file_data)
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> Result<Option<SavingsGoal>, PocketbookError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.get(&id).cloned())
    }

    /// Get all goals for an owner
    pub fn all_for_owner(&self, owner: UserId) -> Result<Vec<SavingsGoal>, PocketbookError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = goals
            .values()
            .filter(|g| g.owner_id == owner)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    /// Insert or update a goal
    pub fn upsert(&self, goal: SavingsGoal) -> Result<(), PocketbookError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        goals.insert(goal.id, goal);
        Ok(())
    }

    /// Delete a goal
    pub fn delete(&self, id: GoalId) -> Result<bool, PocketbookError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(goals.remove(&id).is_some())
    }

    /// Get all goals (export support)
    pub fn get_all(&self) -> Result<Vec<SavingsGoal>, PocketbookError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = goals.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, GoalRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");
        let repo = GoalRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_all_for_owner_filters() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let ana = UserId::new();
        let bea = UserId::new();

        repo.upsert(SavingsGoal::new(ana, "Vacation", Money::from_cents(1000)))
            .unwrap();
        repo.upsert(SavingsGoal::new(bea, "Car", Money::from_cents(2000)))
            .unwrap();

        let goals = repo.all_for_owner(ana).unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].name, "Vacation");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let goal = SavingsGoal::new(UserId::new(), "Laptop", Money::from_cents(50000));
        let id = goal.id;
        repo.upsert(goal).unwrap();
        repo.save().unwrap();

        let repo2 = GoalRepository::new(temp_dir.path().join("goals.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().name, "Laptop");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let goal = SavingsGoal::new(UserId::new(), "Bike", Money::from_cents(100));
        let id = goal.id;
        repo.upsert(goal).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
    }
}
