use super::*;

use chrono::{DateTime, TimeZone};
use rust_decimal::RoundingStrategy;
use std::fmt::Display;

/// en-US currency: dollar sign, thousands separators, two decimal places rounded half away from
/// zero, leading minus for negative amounts.
pub fn format_currency(amount: Decimal) -> String {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = cents.is_sign_negative() && !cents.is_zero();
    cents.set_sign_positive(true);
    cents.rescale(2);
    let digits = cents.to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    // rescale() can't add digits past 28 significant ones, so the fraction may still be short
    format!(
        "{}${}.{:0<2}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

/// 24 hour wall clock time, like 13:04:05
pub fn clock_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%H:%M:%S").to_string()
}

/// Date and time for log records, like 10/18/2026 1:04:05 PM
pub fn log_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%-m/%-d/%Y %-I:%M:%S %p").to_string()
}
