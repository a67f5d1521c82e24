/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const ORANGE: &str = "\x1b[38;5;208m";
pub const CYAN: &str = "\x1b[36m";

use crate::core::aggregate::BudgetColor;

/// ANSI code for a budget traffic-light color.
pub fn color_for_budget(c: BudgetColor) -> &'static str {
    match c {
        BudgetColor::Green => GREEN,
        BudgetColor::Orange => ORANGE,
        BudgetColor::Red => RED,
    }
}

/// Grey out placeholder values ("N/A", empty) in report output.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "N/A" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
