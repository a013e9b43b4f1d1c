//! Derived-value computation: pure formatting and normalization helpers.
//! Identical inputs always yield identical outputs; no hidden state.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Sign of a warning amount, captured separately from its absolute value so
/// message composition can pick the right phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountDirection {
    /// The account went below zero or past its limit.
    Overdrawn,
    /// The available amount shrank but stayed in bounds.
    Reduced,
}

/// Formats a monetary amount in Danish style: `.` for grouping, `,` for
/// decimals, always two decimal places.
pub fn currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (digits - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}

/// Danish short date: `DD-MM-YYYY`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Danish short date plus short time: `DD-MM-YYYY HH:MM`.
pub fn short_date_time(moment: DateTime<Utc>) -> String {
    moment.format("%d-%m-%Y %H:%M").to_string()
}

/// Splits a signed warning amount into its absolute value and a direction.
pub fn normalized_amount(amount: Decimal) -> (Decimal, AmountDirection) {
    if amount.is_sign_negative() && !amount.is_zero() {
        (amount.abs(), AmountDirection::Overdrawn)
    } else {
        (amount, AmountDirection::Reduced)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn currency_groups_thousands_danish_style() {
        assert_eq!(currency(dec!(1234567.891)), "1.234.567,89");
        assert_eq!(currency(dec!(1000)), "1.000,00");
        assert_eq!(currency(dec!(999.9)), "999,90");
        assert_eq!(currency(dec!(0)), "0,00");
    }

    #[test]
    fn currency_keeps_the_sign_in_front_of_the_grouping() {
        assert_eq!(currency(dec!(-5000.5)), "-5.000,50");
    }

    #[test]
    fn short_date_is_day_first() {
        let date = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
        assert_eq!(short_date(date), "01-01-2014");
    }

    #[test]
    fn short_date_time_includes_minutes() {
        let moment: DateTime<Utc> = "2013-06-30T12:05:00Z".parse().unwrap();
        assert_eq!(short_date_time(moment), "30-06-2013 12:05");
    }

    #[test]
    fn negative_amounts_normalize_to_overdrawn() {
        assert_eq!(
            normalized_amount(dec!(-750.25)),
            (dec!(750.25), AmountDirection::Overdrawn)
        );
        assert_eq!(
            normalized_amount(dec!(100)),
            (dec!(100), AmountDirection::Reduced)
        );
        assert_eq!(
            normalized_amount(Decimal::ZERO),
            (Decimal::ZERO, AmountDirection::Reduced)
        );
    }
}
