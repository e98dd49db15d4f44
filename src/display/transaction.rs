//! Transaction display formatting

use std::collections::HashMap;

use crate::models::{Category, CategoryId, Transaction};

/// Format transactions as an aligned table
pub fn format_transaction_table(
    transactions: &[Transaction],
    categories: &[Category],
    currency: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<30} {:<16} {:>12}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&format!("{}\n", "-".repeat(72)));

    for txn in transactions {
        let category = names.get(&txn.category_id).copied().unwrap_or("Unknown");
        output.push_str(&format!(
            "{:<12} {:<30} {:<16} {:>12}\n",
            txn.occurred_at.format("%Y-%m-%d"),
            truncate(&txn.description, 30),
            truncate(category, 16),
            txn.amount.format_with_symbol(currency),
        ));
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, UserId};

    #[test]
    fn test_empty_table() {
        let output = format_transaction_table(&[], &[], "€");
        assert_eq!(output, "No transactions found.");
    }

    #[test]
    fn test_table_resolves_category_names() {
        let category = Category::new("Groceries");
        let txn = Transaction::new(
            UserId::new(),
            "Milk",
            Money::from_cents(250),
            category.id,
        );

        let output = format_transaction_table(&[txn], &[category], "€");
        assert!(output.contains("Milk"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("€2.50"));
    }

    #[test]
    fn test_long_description_truncated() {
        let category = Category::new("Groceries");
        let txn = Transaction::new(
            UserId::new(),
            "A very long description that will not fit in the column",
            Money::from_cents(100),
            category.id,
        );

        let output = format_transaction_table(&[txn], &[category], "€");
        assert!(output.contains('…'));
    }
}
