//! Day-granularity date helpers.
//!
//! Everything here operates on [`chrono::NaiveDate`] (a local calendar day, no timezone). An
//! "invalid" date is represented as `None`; helpers that can observe one short-circuit instead of
//! panicking. Arithmetic saturates at [`NaiveDate::MIN`] / [`NaiveDate::MAX`].
use chrono::Datelike;
use chrono::Months;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::TimeDelta;
use chrono::Weekday;

/// Wire format for dates passed in and out of the calendar state (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("empty date string")]
    Empty,
    #[error("invalid date `{input}`: {source}")]
    Format {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// An unordered pair of endpoints, as supplied by callers (`{ start, end }`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeValue<T> {
    pub start: T,
    pub end: T,
}

impl<T> RangeValue<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

/// A closed date range with `start <= end`.
///
/// Deserialized endpoints are sorted the same way as [`DateRange::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RangeValue<NaiveDate>")
)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range from two endpoints in either order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, both endpoints included.
    pub fn len_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }

    pub fn to_strings(&self) -> RangeValue<String> {
        RangeValue::new(stringify_date(self.start), stringify_date(self.end))
    }
}

impl From<RangeValue<NaiveDate>> for DateRange {
    fn from(value: RangeValue<NaiveDate>) -> Self {
        DateRange::new(value.start, value.end)
    }
}

pub fn parse_date_strict(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| DateError::Format {
        input: trimmed.to_string(),
        source,
    })
}

/// Parses an optional `yyyy-MM-dd` string. Absent or malformed input yields "no value".
pub fn parse_date(input: Option<&str>) -> Option<NaiveDate> {
    let input = input?;
    match parse_date_strict(input) {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::debug!(%err, "ignoring unparseable date");
            None
        }
    }
}

/// Parses both endpoints; a range with either endpoint missing is no range at all.
pub fn parse_date_range(input: Option<&RangeValue<String>>) -> Option<DateRange> {
    let input = input?;
    let start = parse_date(Some(&input.start))?;
    let end = parse_date(Some(&input.end))?;
    Some(DateRange::new(start, end))
}

pub fn stringify_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `true` iff `value` is present and falls before `min` or after `max`.
pub fn is_invalid_date_range(
    value: Option<NaiveDate>,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> bool {
    let Some(value) = value else {
        return false;
    };
    min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max)
}

fn saturate(amount: i64) -> NaiveDate {
    if amount < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    }
}

pub fn add_days(date: NaiveDate, amount: i64) -> NaiveDate {
    TimeDelta::try_days(amount)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or_else(|| saturate(amount))
}

pub fn sub_days(date: NaiveDate, amount: i64) -> NaiveDate {
    add_days(date, amount.saturating_neg())
}

pub fn add_weeks(date: NaiveDate, amount: i64) -> NaiveDate {
    add_days(date, amount.saturating_mul(7))
}

pub fn sub_weeks(date: NaiveDate, amount: i64) -> NaiveDate {
    add_weeks(date, amount.saturating_neg())
}

/// Adds calendar months, clamping the day to the last valid day of the target month.
pub fn add_months(date: NaiveDate, amount: i64) -> NaiveDate {
    let Ok(months) = u32::try_from(amount.unsigned_abs()) else {
        return saturate(amount);
    };
    let months = Months::new(months);
    let next = if amount < 0 {
        date.checked_sub_months(months)
    } else {
        date.checked_add_months(months)
    };
    next.unwrap_or_else(|| saturate(amount))
}

pub fn sub_months(date: NaiveDate, amount: i64) -> NaiveDate {
    add_months(date, amount.saturating_neg())
}

pub fn add_years(date: NaiveDate, amount: i64) -> NaiveDate {
    add_months(date, amount.saturating_mul(12))
}

pub fn sub_years(date: NaiveDate, amount: i64) -> NaiveDate {
    add_years(date, amount.saturating_neg())
}

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(get_days_in_month(date)).unwrap_or(date)
}

pub fn start_of_day(datetime: NaiveDateTime) -> NaiveDate {
    datetime.date()
}

pub fn get_days_in_month(date: NaiveDate) -> u32 {
    let start = start_of_month(date);
    match start.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(start).num_days() as u32,
        // Only December of the last representable year has no successor.
        None => 31,
    }
}

/// Returns the candidate closest to `target` in days.
///
/// Equidistant candidates resolve to the first one seen; this follows from iteration order and
/// callers should not rely on it. Any invalid input (including an empty candidate list) yields
/// `None`.
pub fn closest_to<I>(target: Option<NaiveDate>, candidates: I) -> Option<NaiveDate>
where
    I: IntoIterator<Item = Option<NaiveDate>>,
{
    let target = target?;
    let mut best: Option<(NaiveDate, i64)> = None;
    for candidate in candidates {
        let candidate = candidate?;
        let distance = target.signed_duration_since(candidate).num_days().abs();
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(date, _)| date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn add_months_clamps_to_last_day() {
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
        assert_eq!(add_months(d(2023, 1, 31), 1), d(2023, 2, 28));
        assert_eq!(sub_months(d(2024, 3, 31), 1), d(2024, 2, 29));
        assert_eq!(add_years(d(2024, 2, 29), 1), d(2025, 2, 28));
    }

    #[test]
    fn month_clamping_is_not_reversible() {
        // Jan 31 + 1 month - 1 month lands on Jan 29, not Jan 31.
        let there = add_months(d(2024, 1, 31), 1);
        assert_eq!(sub_months(there, 1), d(2024, 1, 29));
    }

    #[test]
    fn day_arithmetic_round_trips() {
        let base = d(2024, 12, 30);
        for n in [-400, -31, -1, 0, 1, 2, 59, 366] {
            assert_eq!(sub_days(add_days(base, n), n), base);
            assert_eq!(sub_weeks(add_weeks(base, n), n), base);
        }
    }

    #[test]
    fn arithmetic_saturates_instead_of_panicking() {
        assert_eq!(add_days(d(2024, 1, 1), i64::MAX), NaiveDate::MAX);
        assert_eq!(sub_days(d(2024, 1, 1), i64::MAX), NaiveDate::MIN);
        assert_eq!(add_years(d(2024, 1, 1), i64::MIN), NaiveDate::MIN);
        assert_eq!(add_months(NaiveDate::MAX, 1), NaiveDate::MAX);
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(start_of_month(d(2024, 2, 17)), d(2024, 2, 1));
        assert_eq!(end_of_month(d(2024, 2, 17)), d(2024, 2, 29));
        assert_eq!(end_of_month(d(2023, 12, 1)), d(2023, 12, 31));
        assert_eq!(get_days_in_month(d(2023, 2, 1)), 28);
        assert_eq!(get_days_in_month(d(2024, 4, 30)), 30);
        assert_eq!(get_days_in_month(NaiveDate::MAX), 31);
    }

    #[test]
    fn same_day_and_month() {
        let a = d(2024, 6, 1);
        let b = d(2024, 6, 30);
        assert!(is_same_day(a, a));
        assert!(is_same_month(a, b));
        assert!(is_same_month(b, a));
        assert!(!is_same_month(a, d(2023, 6, 1)));
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(d(2024, 6, 15)));
        assert!(is_weekend(d(2024, 6, 16)));
        assert!(!is_weekend(d(2024, 6, 17)));
    }

    #[test]
    fn closest_to_prefers_first_on_tie() {
        let target = Some(d(2024, 6, 15));
        let got = closest_to(target, [Some(d(2024, 6, 10)), Some(d(2024, 6, 20))]);
        assert_eq!(got, Some(d(2024, 6, 10)));
        let got = closest_to(target, [Some(d(2024, 6, 20)), Some(d(2024, 6, 10))]);
        assert_eq!(got, Some(d(2024, 6, 20)));
        let got = closest_to(target, [Some(d(2024, 1, 1)), Some(d(2024, 6, 16))]);
        assert_eq!(got, Some(d(2024, 6, 16)));
    }

    #[test]
    fn closest_to_invalid_inputs() {
        let target = Some(d(2024, 6, 15));
        assert_eq!(closest_to(target, []), None);
        assert_eq!(closest_to(None, [Some(d(2024, 6, 10))]), None);
        assert_eq!(closest_to(target, [Some(d(2024, 6, 14)), None]), None);
    }

    #[test]
    fn invalid_range_checks_both_bounds() {
        let min = Some(d(2024, 1, 10));
        let max = Some(d(2024, 1, 20));
        assert!(!is_invalid_date_range(None, min, max));
        assert!(!is_invalid_date_range(Some(d(2024, 1, 10)), min, max));
        assert!(!is_invalid_date_range(Some(d(2024, 1, 20)), min, max));
        assert!(is_invalid_date_range(Some(d(2024, 1, 9)), min, max));
        assert!(is_invalid_date_range(Some(d(2024, 1, 21)), min, max));
        assert!(!is_invalid_date_range(Some(d(1900, 1, 1)), None, max));
    }

    #[test]
    fn parse_and_stringify() {
        assert_eq!(parse_date(Some("2024-03-15")), Some(d(2024, 3, 15)));
        assert_eq!(parse_date(Some(" 2024-03-15 ")), Some(d(2024, 3, 15)));
        assert_eq!(parse_date(Some("2024-02-30")), None);
        assert_eq!(parse_date(Some("not a date")), None);
        assert_eq!(parse_date(None), None);
        assert_eq!(parse_date_strict(""), Err(DateError::Empty));
        assert!(matches!(
            parse_date_strict("15/03/2024"),
            Err(DateError::Format { .. })
        ));
        assert_eq!(stringify_date(d(2024, 3, 5)), "2024-03-05");
    }

    #[test]
    fn parse_range_requires_both_ends_and_sorts() {
        let reversed = RangeValue::new("2024-05-10".to_string(), "2024-05-05".to_string());
        let range = parse_date_range(Some(&reversed)).unwrap();
        assert_eq!(range.start(), d(2024, 5, 5));
        assert_eq!(range.end(), d(2024, 5, 10));
        assert_eq!(range.len_days(), 6);

        let half = RangeValue::new("2024-05-10".to_string(), "oops".to_string());
        assert_eq!(parse_date_range(Some(&half)), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_range_is_sorted() {
        let r: DateRange =
            serde_json::from_str(r#"{"start":"2024-05-10","end":"2024-05-05"}"#).unwrap();
        assert_eq!((r.start(), r.end()), (d(2024, 5, 5), d(2024, 5, 10)));
        assert_eq!(r.len_days(), 6);
        assert!(r.contains(d(2024, 5, 7)));
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"start":"2024-05-05","end":"2024-05-10"}"#
        );
    }
}
