//! Formatting helpers shared by the report views
//!
//! Currency is always rendered as a symbol prefix followed by a fixed-point
//! amount with thousands separators.

use crate::models::Money;
use crate::reports::BudgetState;

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if value < 1000 {
            groups.push(value.to_string());
            break;
        }
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

/// Format an amount with two fractional digits, e.g. `P1,200.00`
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let cents = amount.cents().unsigned_abs();
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Format an amount rounded to whole units, e.g. `P1,200`
///
/// Used for coarse summary figures. Halves round away from zero.
pub fn format_currency_whole(amount: Money, symbol: &str) -> String {
    let cents = amount.cents().unsigned_abs();
    let units = (cents + 50) / 100;
    let sign = if amount.is_negative() && units > 0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(units))
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar filled to `ratio` (0.0..=1.0) of `width`
pub fn format_bar(ratio: f64, width: usize) -> String {
    if ratio.is_nan() || ratio <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((ratio.min(1.0)) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Human label for a budget state
pub fn status_label(state: BudgetState) -> &'static str {
    match state {
        BudgetState::Good => "On track",
        BudgetState::Warning => "Almost there",
        BudgetState::Exceeded => "Over budget",
    }
}

/// Marker shown next to budgets that need attention
pub fn status_marker(state: BudgetState) -> &'static str {
    match state {
        BudgetState::Good => "✓",
        BudgetState::Warning | BudgetState::Exceeded => "!",
    }
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate to at most `max_len` characters, ending with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::from_major(1200), "P"), "P1,200.00");
        assert_eq!(format_currency(Money::from_cents(15632), "P"), "P156.32");
        assert_eq!(format_currency(Money::from_cents(-1250), "$"), "-$12.50");
        assert_eq!(format_currency(Money::zero(), "P"), "P0.00");
        assert_eq!(
            format_currency(Money::from_cents(123_456_789), "P"),
            "P1,234,567.89"
        );
    }

    #[test]
    fn test_format_currency_whole() {
        assert_eq!(format_currency_whole(Money::from_cents(520_049), "P"), "P5,200");
        assert_eq!(format_currency_whole(Money::from_cents(520_050), "P"), "P5,201");
        assert_eq!(format_currency_whole(Money::from_cents(-20_000), "P"), "-P200");
        assert_eq!(format_currency_whole(Money::from_cents(-40), "P"), "P0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(75.0), "75%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0.5, 10).chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(1.7, 4), "████");
        assert_eq!(format_bar(0.0, 3), "░░░");
        assert_eq!(format_bar(f64::NAN, 2), "░░");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(BudgetState::Good), "On track");
        assert_eq!(status_label(BudgetState::Warning), "Almost there");
        assert_eq!(status_label(BudgetState::Exceeded), "Over budget");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Groceries at Choppies", 12), "Groceries...");
        assert_eq!(truncate("Rent", 10), "Rent");
        assert_eq!(truncate("Électricité", 5), "Él...");
    }
}
