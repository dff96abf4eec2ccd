//! Display formatting helpers

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Most fraction digits shown by [`format_number`]
const MAX_FRACTION_DIGITS: u32 = 3;

/// Group the digits of an unsigned integer string with thousands separators
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format a number with thousands separators.
///
/// Trailing fraction zeros are dropped and at most three fraction digits are
/// kept, so `1234.5` renders as `1,234.5` and `3000` as `3,000`.
pub fn format_number(n: Decimal) -> String {
    let rounded = n
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Symbol shown in front of an amount; unknown currencies use their code
pub fn currency_symbol(currency: &str) -> &str {
    match currency {
        "USD" => "$",
        other => other,
    }
}

/// Format the magnitude of an amount with its currency symbol, e.g. `$3,000`
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    format!("{}{}", currency_symbol(currency), format_number(amount.abs()))
}

/// Like [`format_currency`] but prefixes negative amounts with `-`
pub fn format_signed_currency(amount: Decimal, currency: &str) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}{}", sign, format_currency(amount, currency))
}

/// Format a date as `MM/DD/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Format a percentage change with an explicit sign, e.g. `+5%` or `-2%`
pub fn format_percentage(value: i64) -> String {
    let sign = if value >= 0 { "+" } else { "" };
    format!("{}{}%", sign, value)
}

/// Format an optional percentage change; `None` has no baseline
pub fn format_change(value: Option<i64>) -> String {
    match value {
        Some(v) => format_percentage(v),
        None => "n/a".to_string(),
    }
}

/// The "Showing X-Y of N transactions" line under the table.
///
/// `start` is the zero-based start index and `end` the exclusive end index.
pub fn showing_label(start: usize, end: usize, total: usize) -> String {
    if total == 0 || end <= start {
        format!("Showing 0 of {} transactions", total)
    } else {
        format!("Showing {}-{} of {} transactions", start + 1, end, total)
    }
}
