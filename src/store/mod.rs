//! Storage layer for Pocketbook
//!
//! Provides JSON file storage with atomic writes plus the local session.
//! Every repository holds its rows in memory behind an `RwLock` and persists
//! them as a whole file.

pub mod budgets;
pub mod categories;
pub mod file_io;
pub mod goals;
pub mod init;
pub mod session;
pub mod transactions;
pub mod users;
pub mod wealth;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use init::initialize_store;
pub use session::SessionStore;
pub use transactions::TransactionRepository;
pub use users::UserRepository;
pub use wealth::WealthRepository;

use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookError;

/// Main storage coordinator that provides access to all repositories
pub struct Store {
    paths: PocketbookPaths,
    pub users: UserRepository,
    pub session: SessionStore,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
    pub wealth: WealthRepository,
}

impl Store {
    /// Create a new Store instance
    pub fn new(paths: PocketbookPaths) -> Result<Self, PocketbookError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            session: SessionStore::new(paths.session_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            goals: GoalRepository::new(paths.goals_file()),
            wealth: WealthRepository::new(paths.wealth_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PocketbookPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), PocketbookError> {
        self.users.load()?;
        self.categories.load()?;
        self.transactions.load()?;
        self.budgets.load()?;
        self.goals.load()?;
        self.wealth.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PocketbookError> {
        self.users.save()?;
        self.categories.save()?;
        self.transactions.save()?;
        self.budgets.save()?;
        self.goals.save()?;
        self.wealth.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (has any data)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
