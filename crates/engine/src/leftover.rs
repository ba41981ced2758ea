use crate::{EXPENSE_COUNT, parse_amount};

/// Returns what is left of the balance once every expense is paid.
///
/// Each text goes through [`parse_amount`], so empty or invalid fields count
/// as zero. The expenses follow the order of
/// [`ExpenseCategory::ALL`](crate::ExpenseCategory::ALL).
///
/// ```rust
/// use expense_engine::compute_leftover;
///
/// let left = compute_leftover("1000", &["100", "50", "20", "30", "40", "10"]);
/// assert_eq!(left, 750.0);
/// ```
#[must_use]
pub fn compute_leftover(balance_text: &str, expense_texts: &[&str; EXPENSE_COUNT]) -> f64 {
    let expenses: f64 = expense_texts.iter().map(|text| parse_amount(text)).sum();
    parse_amount(balance_text) - expenses
}
