//! Savings goal service

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{GoalId, Money, SavingsGoal, UserId};
use crate::store::Store;

/// Service for savings goal management
pub struct GoalService<'a> {
    store: &'a Store,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new savings goal
    pub fn create(
        &self,
        owner: UserId,
        name: &str,
        target_amount: Money,
    ) -> PocketbookResult<SavingsGoal> {
        let goal = SavingsGoal::new(owner, name.trim(), target_amount);

        goal.validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        self.store.goals.upsert(goal.clone())?;
        self.store.goals.save()?;

        Ok(goal)
    }

    /// All goals for an owner
    pub fn list(&self, owner: UserId) -> PocketbookResult<Vec<SavingsGoal>> {
        self.store.goals.all_for_owner(owner)
    }

    /// Goals an owner has reached
    pub fn completed(&self, owner: UserId) -> PocketbookResult<Vec<SavingsGoal>> {
        Ok(self
            .list(owner)?
            .into_iter()
            .filter(|g| g.is_complete())
            .collect())
    }

    /// Goals an owner is still saving toward
    pub fn active(&self, owner: UserId) -> PocketbookResult<Vec<SavingsGoal>> {
        Ok(self
            .list(owner)?
            .into_iter()
            .filter(|g| !g.is_complete())
            .collect())
    }

    /// Add a contribution to a goal
    pub fn contribute(
        &self,
        owner: UserId,
        id: GoalId,
        amount: Money,
    ) -> PocketbookResult<SavingsGoal> {
        if !amount.is_positive() {
            return Err(PocketbookError::Validation(
                "Contribution must be positive".into(),
            ));
        }

        let mut goal = self.owned_goal(owner, id)?;
        goal.contribute(amount);

        self.store.goals.upsert(goal.clone())?;
        self.store.goals.save()?;

        Ok(goal)
    }

    /// Delete a goal
    pub fn delete(&self, owner: UserId, id: GoalId) -> PocketbookResult<()> {
        self.owned_goal(owner, id)?;
        self.store.goals.delete(id)?;
        self.store.goals.save()?;
        Ok(())
    }

    fn owned_goal(&self, owner: UserId, id: GoalId) -> PocketbookResult<SavingsGoal> {
        let goal = self
            .store
            .goals
            .get(id)?
            .ok_or_else(|| PocketbookError::goal_not_found(id.to_string()))?;

        if goal.owner_id != owner {
            return Err(PocketbookError::goal_not_found(id.to_string()));
        }

        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketbookPaths;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_create_and_contribute() {
        let (_temp_dir, store) = create_test_store();
        let owner = UserId::new();
        let service = GoalService::new(&store);

        let goal = service
            .create(owner, "Vacation", Money::from_cents(100000))
            .unwrap();

        let goal = service
            .contribute(owner, goal.id, Money::from_cents(40000))
            .unwrap();
        assert_eq!(goal.current_amount.cents(), 40000);
        assert!(!goal.is_complete());
    }

    #[test]
    fn test_contribution_must_be_positive() {
        let (_temp_dir, store) = create_test_store();
        let owner = UserId::new();
        let service = GoalService::new(&store);

        let goal = service
            .create(owner, "Vacation", Money::from_cents(100000))
            .unwrap();

        assert!(service.contribute(owner, goal.id, Money::zero()).is_err());
        assert!(service
            .contribute(owner, goal.id, Money::from_cents(-100))
            .is_err());
    }

    #[test]
    fn test_completed_and_active_split() {
        let (_temp_dir, store) = create_test_store();
        let owner = UserId::new();
        let service = GoalService::new(&store);

        let done = service
            .create(owner, "Laptop", Money::from_cents(1000))
            .unwrap();
        service
            .contribute(owner, done.id, Money::from_cents(1000))
            .unwrap();

        service
            .create(owner, "Car", Money::from_cents(500000))
            .unwrap();

        let completed = service.completed(owner).unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].name, "Laptop");

        let active = service.active(owner).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Car");
    }

    #[test]
    fn test_ownership_enforced() {
        let (_temp_dir, store) = create_test_store();
        let owner = UserId::new();
        let stranger = UserId::new();
        let service = GoalService::new(&store);

        let goal = service
            .create(owner, "Vacation", Money::from_cents(100000))
            .unwrap();

        assert!(service
            .contribute(stranger, goal.id, Money::from_cents(100))
            .is_err());
        assert!(service.delete(stranger, goal.id).is_err());
        assert!(service.delete(owner, goal.id).is_ok());
    }
}
