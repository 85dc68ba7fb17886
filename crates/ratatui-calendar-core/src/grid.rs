use crate::date;
use crate::format::DateFormatter;
use crate::format::FormatProfile;
use chrono::Datelike;
use chrono::NaiveDate;
use chrono::Weekday;

/// Builds `week_count` rows of 7 consecutive dates.
///
/// `month` is 1-based. The first `month_start_offset` cells belong to the previous month so that
/// the 1st lands under its weekday column; trailing cells spill into the next month. The grid is
/// always fully populated. An unrepresentable `month`/`year` yields an empty grid.
pub fn generate_month_grid(
    month: u32,
    month_start_offset: u32,
    week_count: u32,
    year: i32,
) -> Vec<Vec<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let origin = date::sub_days(first, i64::from(month_start_offset));
    (0..week_count)
        .map(|week| {
            (0..7)
                .map(|day| date::add_days(origin, i64::from(week * 7 + day)))
                .collect()
        })
        .collect()
}

/// Leading cells (0-6) needed before the 1st of `date`'s month.
pub fn month_start_offset(date: NaiveDate, week_start: Weekday) -> u32 {
    let first = date::start_of_month(date).weekday().num_days_from_sunday();
    (first + 7 - week_start.num_days_from_sunday()) % 7
}

pub fn weeks_in_month(date: NaiveDate, week_start: Weekday) -> u32 {
    let cells = month_start_offset(date, week_start) + date::get_days_in_month(date);
    cells.div_ceil(7)
}

/// The visible month: its first day, the week layout, and the generated rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    month_start: NaiveDate,
    week_start: Weekday,
    weeks: Vec<Vec<NaiveDate>>,
}

impl MonthGrid {
    pub fn new(month: NaiveDate, week_start: Weekday) -> Self {
        let month_start = date::start_of_month(month);
        let weeks = generate_month_grid(
            month_start.month(),
            month_start_offset(month_start, week_start),
            weeks_in_month(month_start, week_start),
            month_start.year(),
        );
        Self {
            month_start,
            week_start,
            weeks,
        }
    }

    pub fn month_start(&self) -> NaiveDate {
        self.month_start
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn weeks(&self) -> &[Vec<NaiveDate>] {
        &self.weeks
    }

    pub fn rows(&self) -> usize {
        self.weeks.len()
    }

    /// `true` if `date` is one of this month's own days (not filler).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date::is_same_month(date, self.month_start)
    }

    /// `(row, column)` of `date`, if the grid shows it.
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        let first = *self.weeks.first()?.first()?;
        let offset = usize::try_from(date.signed_duration_since(first).num_days()).ok()?;
        let pos = (offset / 7, offset % 7);
        (pos.0 < self.rows()).then_some(pos)
    }

    pub fn date_at(&self, row: usize, col: usize) -> Option<NaiveDate> {
        self.weeks.get(row)?.get(col).copied()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekDay {
    pub weekday: Weekday,
    pub title: String,
    pub abbr: String,
}

/// Column headers for a grid starting on `week_start`.
pub fn week_days(week_start: Weekday, formatter: &dyn DateFormatter) -> Vec<WeekDay> {
    // 2023-01-01 is a Sunday.
    let sunday = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN);
    let first = i64::from(week_start.num_days_from_sunday());
    (0..7)
        .map(|i| {
            let day = date::add_days(sunday, first + i);
            WeekDay {
                weekday: day.weekday(),
                title: formatter.format(day, FormatProfile::WeekdayLong),
                abbr: formatter.format(day, FormatProfile::WeekdayShort),
            }
        })
        .collect()
}
