//! Dashboard display formatting

use crate::models::Category;
use crate::reports::{CategorySpend, MonthSummary};

/// Format the monthly summary block
pub fn format_month_summary(summary: &MonthSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Dashboard: {}\n", summary.month.friendly()));
    output.push_str(&format!("{}\n", "=".repeat(48)));
    output.push_str(&format!(
        "  Income:           {:>12}\n",
        summary.income.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Expenses:         {:>12}\n",
        summary.expenses.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Remaining:        {:>12}\n",
        summary.remaining.format_with_symbol(currency)
    ));
    output.push('\n');
    output.push_str(&format!(
        "  Effective budget: {:>12}\n",
        summary.effective_budget.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Budget left:      {:>12}\n",
        summary.budget_left.format_with_symbol(currency)
    ));
    output.push('\n');
    output.push_str(&format!(
        "  Savings:          {:>12}\n",
        summary.savings.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Total wealth:     {:>12}\n",
        summary.total_wealth.format_with_symbol(currency)
    ));

    output
}

/// Format the per-category spending breakdown
pub fn format_category_breakdown(breakdown: &[CategorySpend], currency: &str) -> String {
    if breakdown.is_empty() {
        return "No spending this month.".to_string();
    }

    let mut output = String::new();
    output.push_str("Spending by category:\n");

    for spend in breakdown {
        output.push_str(&format!(
            "  {:<20} {:>12}\n",
            spend.name,
            spend.total.format_with_symbol(currency)
        ));
    }

    output
}

/// Format the category list as a flat tree
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'pocketbook init' to create default categories."
            .to_string();
    }

    let mut output = String::new();
    output.push_str("Categories:\n");

    for (i, category) in categories.iter().enumerate() {
        let is_last = i == categories.len() - 1;
        let prefix = if is_last { "└── " } else { "├── " };
        let role = if category.is_income() { " (income)" } else { "" };
        output.push_str(&format!("{}{}{}\n", prefix, category.name, role));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRole, Money, Month, UserId, WealthRecord};
    use crate::services::dashboard::MonthlyReconciliation;

    #[test]
    fn test_summary_block() {
        let reconciliation = MonthlyReconciliation {
            month: Month::new(2024, 3),
            transactions: Vec::new(),
            effective_budget: Money::from_cents(70000),
        };
        let wealth = WealthRecord::empty(UserId::new());
        let summary = MonthSummary::compute(&reconciliation, None, &wealth);

        let output = format_month_summary(&summary, "€");
        assert!(output.contains("March 2024"));
        assert!(output.contains("€700.00"));
    }

    #[test]
    fn test_category_list_marks_income() {
        let categories = vec![
            Category::new("Groceries"),
            Category::with_role("Income", CategoryRole::Income),
        ];

        let output = format_category_list(&categories);
        assert!(output.contains("├── Groceries"));
        assert!(output.contains("└── Income (income)"));
    }

    #[test]
    fn test_empty_category_list_hints_at_init() {
        let output = format_category_list(&[]);
        assert!(output.contains("pocketbook init"));
    }
}
