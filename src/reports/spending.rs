//! Spending aggregates
//!
//! Chart-shaped data: spending per category for one month, and total
//! spending across a trailing run of months. Rendering is someone else's
//! job; these just produce the numbers.

use std::collections::HashMap;

use crate::error::PocketbookResult;
use crate::models::{Category, CategoryId, Money, Month, Transaction, UserId};
use crate::store::Store;

/// Spending total for one category
#[derive(Debug, Clone)]
pub struct CategorySpend {
    pub category_id: CategoryId,
    pub name: String,
    pub total: Money,
}

/// Spending total for one month
#[derive(Debug, Clone)]
pub struct MonthSpend {
    pub month: Month,
    pub total: Money,
}

/// Per-category spending for a set of transactions
///
/// Income-category transactions are left out; unknown categories show up
/// under "Uncategorized". Sorted by descending total.
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
    income_category: Option<CategoryId>,
) -> Vec<CategorySpend> {
    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut totals: HashMap<CategoryId, Money> = HashMap::new();
    for txn in transactions {
        if income_category == Some(txn.category_id) {
            continue;
        }
        *totals.entry(txn.category_id).or_insert_with(Money::zero) += txn.amount;
    }

    let mut breakdown: Vec<CategorySpend> = totals
        .into_iter()
        .map(|(category_id, total)| CategorySpend {
            category_id,
            name: names
                .get(&category_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| "Uncategorized".to_string()),
            total,
        })
        .collect();

    breakdown.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    breakdown
}

/// Total spending per month for the `count` months ending at `end`
///
/// Oldest month first. Income-category transactions are left out.
pub fn trailing_months(
    store: &Store,
    owner: UserId,
    income_category: Option<CategoryId>,
    end: Month,
    count: usize,
) -> PocketbookResult<Vec<MonthSpend>> {
    let mut months = Vec::with_capacity(count);
    let mut month = end;
    for _ in 0..count {
        months.push(month);
        month = month.prev();
    }
    months.reverse();

    let mut result = Vec::with_capacity(count);
    for month in months {
        let transactions = store.transactions.in_window(&month.window(), owner)?;
        let total = transactions
            .iter()
            .filter(|t| income_category != Some(t.category_id))
            .map(|t| t.amount)
            .sum();
        result.push(MonthSpend { month, total });
    }

    Ok(result)
}
