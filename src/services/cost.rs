//! Grand-total computation over the model's free-text day costs.
//!
//! Each day contributes the first integer found in its cost text. The total is
//! always printed with [`CURRENCY_PREFIX`], whatever symbols the days used.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::DayPlan;

/// Prefix applied to the formatted grand total
pub const CURRENCY_PREFIX: &str = "₹";

fn digit_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("digit pattern is valid"))
}

fn single_digit_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\A\d\z").expect("digit pattern is valid"))
}

fn is_decimal_digit(ch: char) -> bool {
    let mut buf = [0u8; 4];
    single_digit_pattern().is_match(ch.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit (`\d`), e.g. '५' -> 5, '１' -> 1.
///
/// Decimal digits are encoded as contiguous 0..9 blocks, so the value is the
/// offset from the start of the surrounding run of digits, modulo 10.
fn decimal_value(ch: char) -> u64 {
    if let Some(value) = ch.to_digit(10) {
        return u64::from(value);
    }

    let mut start = ch as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    u64::from((ch as u32 - start) % 10)
}

/// All maximal digit runs in `text`, left to right, in any script.
pub fn extract_digit_runs(text: &str) -> Vec<&str> {
    digit_run_pattern()
        .find_iter(text)
        .map(|found| found.as_str())
        .collect()
}

/// Integer value of a digit run; saturates at `u64::MAX`.
pub fn digit_run_value(run: &str) -> u64 {
    run.chars()
        .try_fold(0u64, |acc, ch| {
            acc.checked_mul(10)?.checked_add(decimal_value(ch))
        })
        .unwrap_or(u64::MAX)
}

/// Numeric contribution of one day's cost text.
///
/// Commas are dropped first so "₹3,500" reads as 3500. A missing cost counts
/// as "0"; text with no digits contributes nothing.
pub fn day_contribution(cost: Option<&str>) -> u64 {
    let cleaned = cost.unwrap_or("0").replace(',', "");
    extract_digit_runs(&cleaned)
        .first()
        .map(|run| digit_run_value(run))
        .unwrap_or(0)
}

pub fn compute_total(days: &[DayPlan]) -> u64 {
    days.iter()
        .map(|day| day_contribution(day.estimated_cost.as_deref()))
        .fold(0u64, u64::saturating_add)
}

/// Format with thousands separators, e.g. 1234567 -> "₹1,234,567".
pub fn format_total(total: u64) -> String {
    let digits = total.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{CURRENCY_PREFIX}{grouped}")
}

pub fn grand_total(days: &[DayPlan]) -> String {
    format_total(compute_total(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_costing(cost: Option<&str>) -> DayPlan {
        DayPlan {
            estimated_cost: cost.map(str::to_string),
            ..DayPlan::default()
        }
    }

    #[test]
    fn test_extract_digit_runs_in_order() {
        assert_eq!(extract_digit_runs("₹1200 - ₹1500 (approx 2 people)"), vec!["1200", "1500", "2"]);
        assert!(extract_digit_runs("Free").is_empty());
    }

    #[test]
    fn test_day_contribution() {
        assert_eq!(day_contribution(Some("₹3,500")), 3500);
        assert_eq!(day_contribution(Some("$150")), 150);
        assert_eq!(day_contribution(Some("Free")), 0);
        assert_eq!(day_contribution(Some("")), 0);
        assert_eq!(day_contribution(None), 0);
    }

    #[test]
    fn test_non_ascii_digits_count() {
        assert_eq!(day_contribution(Some("₹३,५००")), 3500);
        assert_eq!(day_contribution(Some("¥１５０００")), 15000);
        assert_eq!(day_contribution(Some("٢٠٠ درهم")), 200);
        assert_eq!(extract_digit_runs("₹३५०० or $12"), vec!["३५००", "12"]);
    }

    #[test]
    fn test_digit_run_value() {
        assert_eq!(digit_run_value("0042"), 42);
        assert_eq!(digit_run_value("९"), 9);
        assert_eq!(digit_run_value("０"), 0);
        // mathematical bold 7 then sans-serif 0; the digit blocks are adjacent
        assert_eq!(digit_run_value("\u{1D7D5}\u{1D7E2}"), 70);
    }

    #[test]
    fn test_first_run_wins() {
        assert_eq!(day_contribution(Some("₹1,200 to ₹1,800")), 1200);
        assert_eq!(day_contribution(Some("$12.50")), 12);
    }

    #[test]
    fn test_oversized_run_saturates() {
        assert_eq!(day_contribution(Some("999999999999999999999999")), u64::MAX);
        let days = vec![
            day_costing(Some("999999999999999999999999")),
            day_costing(Some("1")),
        ];
        assert_eq!(compute_total(&days), u64::MAX);
    }

    #[test]
    fn test_grand_total_sums_days() {
        let days = vec![
            day_costing(Some("₹1,000")),
            day_costing(Some("₹2,500")),
            day_costing(Some("Free")),
        ];
        assert_eq!(grand_total(&days), "₹3,500");
    }

    #[test]
    fn test_total_ignores_day_currency() {
        // Known inconsistency: euro days are summed and shown as rupees.
        let days = vec![day_costing(Some("€200")), day_costing(Some("€150"))];
        assert_eq!(grand_total(&days), "₹350");
    }

    #[test]
    fn test_format_total_grouping() {
        assert_eq!(format_total(0), "₹0");
        assert_eq!(format_total(999), "₹999");
        assert_eq!(format_total(1000), "₹1,000");
        assert_eq!(format_total(123456), "₹123,456");
        assert_eq!(format_total(1234567), "₹1,234,567");
    }

    #[test]
    fn test_empty_plan_totals_zero() {
        assert_eq!(grand_total(&[]), "₹0");
    }
}
