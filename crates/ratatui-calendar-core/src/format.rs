//! Locale-facing text formatting.
//!
//! The calendar never formats dates itself; it asks a [`DateFormatter`] for a string in one of a
//! few named profiles. [`EnglishFormatter`] is the built-in implementation.
use chrono::Datelike;
use chrono::NaiveDate;
use chrono::Weekday;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatProfile {
    /// Weekday, month, day and year: `Friday, March 15, 2024`.
    FullDate,
    /// Numeric day of month: `15`.
    Day,
    /// Month and year: `March 2024`.
    MonthYear,
    /// Ordinal day, short month and year: `15th Mar 2024`.
    Ordinal,
    WeekdayLong,
    WeekdayShort,
}

pub trait DateFormatter {
    fn format(&self, date: NaiveDate, profile: FormatProfile) -> String;

    /// First column of the month grid.
    fn week_start(&self) -> Weekday {
        Weekday::Sun
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnglishFormatter {
    week_start: Weekday,
}

impl Default for EnglishFormatter {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
        }
    }
}

impl EnglishFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_week_start(week_start: Weekday) -> Self {
        Self { week_start }
    }
}

impl DateFormatter for EnglishFormatter {
    fn format(&self, date: NaiveDate, profile: FormatProfile) -> String {
        match profile {
            FormatProfile::FullDate => date.format("%A, %B %-d, %Y").to_string(),
            FormatProfile::Day => date.day().to_string(),
            FormatProfile::MonthYear => date.format("%B %Y").to_string(),
            FormatProfile::Ordinal => {
                let day = date.day();
                format!("{day}{} {}", ordinal_suffix(day), date.format("%b %Y"))
            }
            FormatProfile::WeekdayLong => date.format("%A").to_string(),
            FormatProfile::WeekdayShort => date.format("%a").to_string(),
        }
    }

    fn week_start(&self) -> Weekday {
        self.week_start
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_profiles() {
        let f = EnglishFormatter::new();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(f.format(date, FormatProfile::FullDate), "Friday, March 15, 2024");
        assert_eq!(f.format(date, FormatProfile::Day), "15");
        assert_eq!(f.format(date, FormatProfile::MonthYear), "March 2024");
        assert_eq!(f.format(date, FormatProfile::Ordinal), "15th Mar 2024");
        assert_eq!(f.format(date, FormatProfile::WeekdayShort), "Fri");
    }

    #[test]
    fn ordinal_suffixes() {
        let got: Vec<&str> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31]
            .into_iter()
            .map(ordinal_suffix)
            .collect();
        assert_eq!(
            got,
            ["st", "nd", "rd", "th", "th", "th", "th", "st", "nd", "rd", "st"]
        );
    }
}
