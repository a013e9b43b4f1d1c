//! Field validation rules for user-entered text. Pure with respect to their
//! explicit input; the date rule reads the injected clock once per call.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::text::{Text, TextProvider};
use crate::time::Clock;

/// Rejected input, with the data needed to render the catalog message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    Required,
    NotADate,
    /// The parsed date lies strictly after the clock's current date, which is
    /// carried here for the message.
    FutureDate(NaiveDate),
    NotANumber,
}

impl ValidationFailure {
    pub fn message(&self, texts: &dyn TextProvider) -> String {
        match self {
            ValidationFailure::Required => texts.resolve(Text::ValueIsRequired, &[]),
            ValidationFailure::NotADate => texts.resolve(Text::ValueIsNotDate, &[]),
            ValidationFailure::FutureDate(today) => {
                texts.resolve(Text::DateGreaterThan, &[&crate::format::short_date(*today)])
            }
            ValidationFailure::NotANumber => texts.resolve(Text::ValueIsNotANumber, &[]),
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |raw| raw.trim().is_empty())
}

/// Required-text rule: unset, empty, and whitespace-only input is rejected.
pub fn required_text(value: Option<&str>) -> Result<(), ValidationFailure> {
    if is_blank(value) {
        Err(ValidationFailure::Required)
    } else {
        Ok(())
    }
}

/// Optional-text rule: every input is accepted, including none at all.
pub fn optional_text(_value: Option<&str>) -> Result<(), ValidationFailure> {
    Ok(())
}

/// Parses `YYYY-MM-DD` or `DD-MM-YYYY`; `/` is accepted as separator.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    let candidate = raw.replace('/', "-");
    ["%Y-%m-%d", "%d-%m-%Y"]
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(&candidate, pattern).ok())
}

/// Date-text rule. Required-check first, then parse, then the range check:
/// the boundary is strict, so a date equal to today passes and one day later
/// fails. The clock is read here, at validation time, not cached.
pub fn date_text(value: Option<&str>, clock: &dyn Clock) -> Result<NaiveDate, ValidationFailure> {
    required_text(value)?;
    let parsed = parse_date_input(value.unwrap_or_default().trim())
        .ok_or(ValidationFailure::NotADate)?;
    let today = clock.today();
    if parsed > today {
        return Err(ValidationFailure::FutureDate(today));
    }
    Ok(parsed)
}

/// Amount-text rule: unset or empty input means zero; anything else must
/// parse as a decimal. A `,` decimal separator with `.` grouping is accepted
/// alongside the plain `.` form.
pub fn amount_text(value: Option<&str>) -> Result<Decimal, ValidationFailure> {
    let Some(raw) = value.map(str::trim).filter(|trimmed| !trimmed.is_empty()) else {
        return Ok(Decimal::ZERO);
    };
    let normalized = if raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else {
        raw.to_string()
    };
    normalized
        .parse::<Decimal>()
        .map_err(|_| ValidationFailure::NotANumber)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::text::DefaultTexts;
    use crate::time::FixedClock;

    use super::*;

    fn clock() -> FixedClock {
        FixedClock::at(NaiveDate::from_ymd_opt(2014, 6, 30).unwrap())
    }

    #[test]
    fn required_text_rejects_unset_empty_and_whitespace() {
        assert_eq!(required_text(None), Err(ValidationFailure::Required));
        assert_eq!(required_text(Some("")), Err(ValidationFailure::Required));
        assert_eq!(required_text(Some("  \t")), Err(ValidationFailure::Required));
        assert_eq!(required_text(Some("Dankort")), Ok(()));
    }

    #[test]
    fn optional_text_accepts_anything() {
        assert_eq!(optional_text(None), Ok(()));
        assert_eq!(optional_text(Some("")), Ok(()));
        assert_eq!(optional_text(Some("  ")), Ok(()));
        assert_eq!(optional_text(Some("XYZ-47")), Ok(()));
    }

    #[test]
    fn date_text_accepts_both_date_orders() {
        let clock = clock();
        let expected = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
        assert_eq!(date_text(Some("2014-01-01"), &clock), Ok(expected));
        assert_eq!(date_text(Some("01-01-2014"), &clock), Ok(expected));
        assert_eq!(date_text(Some("01/01/2014"), &clock), Ok(expected));
    }

    #[test]
    fn date_text_rejects_unparsable_input() {
        assert_eq!(
            date_text(Some("XYZ"), &clock()),
            Err(ValidationFailure::NotADate)
        );
        assert_eq!(
            date_text(Some("2014-13-40"), &clock()),
            Err(ValidationFailure::NotADate)
        );
    }

    #[test]
    fn date_text_boundary_is_strictly_greater_than_today() {
        let clock = clock();
        let today = NaiveDate::from_ymd_opt(2014, 6, 30).unwrap();
        assert_eq!(date_text(Some("2014-06-30"), &clock), Ok(today));
        assert_eq!(
            date_text(Some("2014-07-01"), &clock),
            Err(ValidationFailure::FutureDate(today))
        );
    }

    #[test]
    fn future_date_message_carries_the_clock_date() {
        let failure = date_text(Some("2014-07-01"), &clock()).unwrap_err();
        assert_eq!(
            failure.message(&DefaultTexts),
            "date greater than 30-06-2014"
        );
    }

    #[test]
    fn empty_date_fails_as_required() {
        assert_eq!(
            date_text(Some("  "), &clock()),
            Err(ValidationFailure::Required)
        );
    }

    #[test]
    fn amount_text_parses_both_separator_styles() {
        assert_eq!(amount_text(Some("1250.50")), Ok(dec!(1250.50)));
        assert_eq!(amount_text(Some("1.250,50")), Ok(dec!(1250.50)));
        assert_eq!(amount_text(None), Ok(Decimal::ZERO));
        assert_eq!(amount_text(Some("")), Ok(Decimal::ZERO));
        assert_eq!(amount_text(Some("abc")), Err(ValidationFailure::NotANumber));
    }
}
