//! Savings goal display formatting

use crate::models::SavingsGoal;

/// Format goals with progress bars
pub fn format_goal_list(goals: &[SavingsGoal], currency: &str) -> String {
    if goals.is_empty() {
        return "No savings goals yet.".to_string();
    }

    let mut output = String::new();

    for goal in goals {
        let pct = goal.progress_percent();
        let filled = (pct as usize) * 20 / 100;
        let bar: String = "#".repeat(filled) + &"-".repeat(20 - filled);
        let status = if goal.is_complete() { " ✓" } else { "" };

        output.push_str(&format!(
            "{:<20} [{}] {:>3}%  {} / {}{}\n",
            goal.name,
            bar,
            pct,
            goal.current_amount.format_with_symbol(currency),
            goal.target_amount.format_with_symbol(currency),
            status,
        ));
    }

    output
}
