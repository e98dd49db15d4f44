//! Monthly summary
//!
//! Aggregates one reconciled month into the headline figures: income,
//! expenses, what is left of the income, how the spending stands against the
//! effective budget, and total wealth.

use crate::models::{CategoryId, Money, Month, WealthRecord};
use crate::services::dashboard::MonthlyReconciliation;

/// Headline figures for one month
#[derive(Debug, Clone)]
pub struct MonthSummary {
    /// The summarized month
    pub month: Month,

    /// Income recorded this month
    pub income: Money,

    /// Spending recorded this month
    pub expenses: Money,

    /// Income minus expenses
    pub remaining: Money,

    /// Declared budget plus carry-over from last month
    pub effective_budget: Money,

    /// Effective budget minus spending
    pub budget_left: Money,

    /// Savings figure from the wealth record
    pub savings: Money,

    /// Savings plus this month's remaining income
    pub total_wealth: Money,
}

impl MonthSummary {
    /// Compute the summary from a reconciliation and the owner's wealth record
    ///
    /// Transactions in the income category count as income; all others count
    /// as expenses. With no income category everything is an expense.
    pub fn compute(
        reconciliation: &MonthlyReconciliation,
        income_category: Option<CategoryId>,
        wealth: &WealthRecord,
    ) -> Self {
        let mut income = Money::zero();
        let mut expenses = Money::zero();

        for txn in &reconciliation.transactions {
            if income_category == Some(txn.category_id) {
                income += txn.amount;
            } else {
                expenses += txn.amount;
            }
        }

        let remaining = income - expenses;
        let effective_budget = reconciliation.effective_budget;

        Self {
            month: reconciliation.month,
            income,
            expenses,
            remaining,
            effective_budget,
            budget_left: effective_budget - expenses,
            savings: wealth.savings,
            total_wealth: wealth.savings + remaining,
        }
    }
}
