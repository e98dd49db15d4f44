//! Dashboard reconciliation engine
//!
//! Computes, for a selected month, the set of transactions belonging to that
//! month and the *effective* budget: the month's declared budget total plus
//! any positive leftover carried from the month before.
//!
//! The carry-over reconciles the previous month's budgets against its net
//! spending (income-tagged transactions reduce net spending, everything else
//! increases it). A deficit month never reduces the current month's budget:
//! only a surplus rolls forward.
//!
//! The engine is synchronous and side-effect free. It holds no cache and no
//! subscriptions; callers re-invoke it when the underlying data changes, and
//! discarding results superseded by a newer reference month is the caller's
//! concern. It must never combine current-month and previous-month data
//! fetched against two different reference months.

use crate::config::settings::BudgetScope;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Budget, CategoryId, Money, Month, MonthWindow, Transaction, UserId};
use crate::store::Store;

/// Read access to the rows the reconciliation needs
///
/// The four fetches a reconciliation performs are independent reads with no
/// ordering dependency. Implemented by [`Store`]; tests substitute fakes.
pub trait MonthDataSource {
    /// All transactions for the owner whose occurrence falls within the
    /// window, both bounds inclusive
    fn transactions_in(
        &self,
        window: &MonthWindow,
        owner: UserId,
    ) -> PocketbookResult<Vec<Transaction>>;

    /// All budgets whose interval overlaps the window; `owner` of `None`
    /// means budgets are shared across users
    fn budgets_overlapping(
        &self,
        window: &MonthWindow,
        owner: Option<UserId>,
    ) -> PocketbookResult<Vec<Budget>>;
}

impl MonthDataSource for Store {
    fn transactions_in(
        &self,
        window: &MonthWindow,
        owner: UserId,
    ) -> PocketbookResult<Vec<Transaction>> {
        self.transactions.in_window(window, owner)
    }

    fn budgets_overlapping(
        &self,
        window: &MonthWindow,
        owner: Option<UserId>,
    ) -> PocketbookResult<Vec<Budget>> {
        self.budgets.overlapping(window, owner)
    }
}

/// The outcome of reconciling one month
///
/// Ephemeral: recomputed on every call, never cached, never mutated once
/// returned.
#[derive(Debug, Clone)]
pub struct MonthlyReconciliation {
    /// The reconciled month
    pub month: Month,

    /// Transactions belonging to the reconciled month, newest first
    pub transactions: Vec<Transaction>,

    /// Declared budget total for the month plus carry-over from the month
    /// before
    pub effective_budget: Money,
}

impl MonthlyReconciliation {
    /// The well-defined result for an unauthenticated caller
    pub fn empty(month: Month) -> Self {
        Self {
            month,
            transactions: Vec::new(),
            effective_budget: Money::zero(),
        }
    }
}

/// Service computing monthly reconciliations
pub struct DashboardService<'a, S: MonthDataSource> {
    source: &'a S,
    budget_scope: BudgetScope,
}

impl<'a, S: MonthDataSource> DashboardService<'a, S> {
    /// Create a new dashboard service
    pub fn new(source: &'a S, budget_scope: BudgetScope) -> Self {
        Self {
            source,
            budget_scope,
        }
    }

    /// Reconcile a month for a possibly-unresolved owner
    ///
    /// An owner of `None` means "not authenticated": the result is empty and
    /// no fetch is issued.
    pub fn load(
        &self,
        owner: Option<UserId>,
        income_category: Option<CategoryId>,
        month: Month,
    ) -> PocketbookResult<MonthlyReconciliation> {
        match owner {
            Some(owner) => self.reconcile(owner, income_category, month),
            None => Ok(MonthlyReconciliation::empty(month)),
        }
    }

    /// Reconcile a month for an owner
    ///
    /// `income_category` identifies the category whose transactions count as
    /// income. When `None` (no income category exists yet), every
    /// previous-month transaction counts as an expense.
    ///
    /// Deterministic given identical source data. If any of the four fetches
    /// fails the whole computation fails; there are no partial results.
    pub fn reconcile(
        &self,
        owner: UserId,
        income_category: Option<CategoryId>,
        month: Month,
    ) -> PocketbookResult<MonthlyReconciliation> {
        let current_window = month.window();
        let previous_window = month.prev().window();

        let budget_owner = match self.budget_scope {
            BudgetScope::Shared => None,
            BudgetScope::PerOwner => Some(owner),
        };

        let current_transactions = self
            .source
            .transactions_in(&current_window, owner)
            .map_err(PocketbookError::reconciliation)?;
        let current_budgets = self
            .source
            .budgets_overlapping(&current_window, budget_owner)
            .map_err(PocketbookError::reconciliation)?;
        let previous_transactions = self
            .source
            .transactions_in(&previous_window, owner)
            .map_err(PocketbookError::reconciliation)?;
        let previous_budgets = self
            .source
            .budgets_overlapping(&previous_window, budget_owner)
            .map_err(PocketbookError::reconciliation)?;

        let current_budget_total: Money = current_budgets.iter().map(|b| b.amount).sum();
        let previous_budget_total: Money = previous_budgets.iter().map(|b| b.amount).sum();

        let previous_net_expenses = net_expenses(&previous_transactions, income_category);

        let previous_month_remaining = previous_budget_total - previous_net_expenses;
        let carry_over = previous_month_remaining.surplus_or_zero();
        let effective_budget = current_budget_total + carry_over;

        Ok(MonthlyReconciliation {
            month,
            transactions: current_transactions,
            effective_budget,
        })
    }
}

/// Sum transactions with income flipped negative
///
/// Income-tagged transactions reduce net expenses by their amount; any other
/// transaction increases it. With no income category, everything counts as
/// an expense.
pub fn net_expenses(transactions: &[Transaction], income_category: Option<CategoryId>) -> Money {
    transactions.iter().fold(Money::zero(), |sum, t| {
        if income_category == Some(t.category_id) {
            sum - t.amount
        } else {
            sum + t.amount
        }
    })
}
