//! Report formatting utilities for terminal output

use crate::models::Money;
use crate::services::CurrencyTotals;

/// Format a percentage with precision depending on its size
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Progress bar for a percentage in 0..=100
pub fn format_progress_bar(pct: f64, width: usize) -> String {
    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// Money with its currency code, signed
pub fn format_signed(amount: Money, currency: &str, negate: bool) -> String {
    let amount = if negate { -amount } else { amount };
    if amount.is_positive() {
        format!("+{}", amount.format_with_currency(currency))
    } else {
        amount.format_with_currency(currency)
    }
}

/// One line per currency, or `empty` when there are no totals
pub fn format_currency_lines(totals: &CurrencyTotals, indent: usize, empty: &str) -> String {
    let pad = " ".repeat(indent);
    if totals.is_empty() {
        return format!("{}{}\n", pad, empty);
    }

    totals
        .iter()
        .map(|(currency, amount)| format!("{}{:<6} {:>14}\n", pad, currency, amount))
        .collect()
}

/// Separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Double separator line
pub fn double_separator(width: usize) -> String {
    "=".repeat(width)
}
