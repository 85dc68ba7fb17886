//! The single-date calendar state machine.
//!
//! [`CalendarState`] tracks the visible month, the focused cell and the committed value. All
//! operations are synchronous and total: a refused operation (read-only, disabled, out of
//! bounds) leaves the state untouched and is only visible as "nothing changed".
use crate::announce::Announcer;
use crate::announce::NoopAnnouncer;
use crate::config::CalendarConfig;
use crate::date;
use crate::format::DateFormatter;
use crate::format::EnglishFormatter;
use crate::format::FormatProfile;
use crate::grid::MonthGrid;
use crate::grid::WeekDay;
use crate::grid::week_days;
use chrono::Datelike;
use chrono::NaiveDate;
use chrono::Weekday;
use std::fmt;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

fn next_id() -> String {
    format!("calendar-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

pub struct CalendarState {
    id: String,
    value: Option<NaiveDate>,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    current_month: NaiveDate,
    focused_date: NaiveDate,
    today: NaiveDate,
    is_disabled: bool,
    is_read_only: bool,
    is_focused: bool,
    week_start_override: Option<Weekday>,
    grid: MonthGrid,
    week_days: Vec<WeekDay>,
    announcer: Box<dyn Announcer>,
    formatter: Box<dyn DateFormatter>,
    on_change: Option<Box<dyn FnMut(&str)>>,
}

impl fmt::Debug for CalendarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarState")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("current_month", &self.current_month)
            .field("focused_date", &self.focused_date)
            .field("is_disabled", &self.is_disabled)
            .field("is_read_only", &self.is_read_only)
            .field("is_focused", &self.is_focused)
            .field("week_start", &self.grid.week_start())
            .finish_non_exhaustive()
    }
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::new(CalendarConfig::default())
    }
}

impl CalendarState {
    pub fn new(config: CalendarConfig) -> Self {
        let today = config
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let value = date::parse_date(config.value.as_deref())
            .or_else(|| date::parse_date(config.default_value.as_deref()));

        let mut min_date = date::parse_date(config.min_value.as_deref());
        let mut max_date = date::parse_date(config.max_value.as_deref());
        if let (Some(min), Some(max)) = (min_date, max_date) {
            if min > max {
                tracing::debug!(%min, %max, "swapping inverted calendar bounds");
                std::mem::swap(&mut min_date, &mut max_date);
            }
        }

        let initial = value.unwrap_or(today);
        let focused_date = if date::is_invalid_date_range(Some(initial), min_date, max_date) {
            date::closest_to(Some(initial), [min_date, max_date].into_iter().flatten().map(Some))
                .unwrap_or(initial)
        } else {
            initial
        };

        let formatter: Box<dyn DateFormatter> = Box::new(EnglishFormatter::new());
        let week_start = config.week_start.unwrap_or_else(|| formatter.week_start());
        let current_month = date::start_of_month(focused_date);

        Self {
            id: config.id.unwrap_or_else(next_id),
            value,
            min_date,
            max_date,
            current_month,
            focused_date,
            today,
            is_disabled: config.is_disabled,
            is_read_only: config.is_read_only,
            is_focused: config.auto_focus,
            week_start_override: config.week_start,
            grid: MonthGrid::new(current_month, week_start),
            week_days: week_days(week_start, formatter.as_ref()),
            announcer: Box::new(NoopAnnouncer),
            formatter,
            on_change: None,
        }
    }

    pub fn with_announcer(mut self, announcer: impl Announcer + 'static) -> Self {
        self.announcer = Box::new(announcer);
        self
    }

    /// Replaces the formatter. Unless the config pinned a week start, the grid is rebuilt with
    /// the formatter's week start.
    pub fn with_formatter(mut self, formatter: impl DateFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        let week_start = self
            .week_start_override
            .unwrap_or_else(|| self.formatter.week_start());
        self.grid = MonthGrid::new(self.current_month, week_start);
        self.week_days = week_days(week_start, self.formatter.as_ref());
        self
    }

    /// Called with the `yyyy-MM-dd` value after every successful commit.
    pub fn with_on_change(mut self, on_change: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max_date
    }

    /// First day of the displayed month.
    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    /// Displayed month, 1-based.
    pub fn month(&self) -> u32 {
        self.current_month.month()
    }

    pub fn year(&self) -> i32 {
        self.current_month.year()
    }

    pub fn focused_date(&self) -> NaiveDate {
        self.focused_date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Updates "today", e.g. when a long-lived session crosses midnight.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn week_start(&self) -> Weekday {
        self.grid.week_start()
    }

    pub fn week_days(&self) -> &[WeekDay] {
        &self.week_days
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// The visible weeks, 7 dates each, including adjacent-month filler.
    pub fn days_in_month(&self) -> &[Vec<NaiveDate>] {
        self.grid.weeks()
    }

    pub fn formatter(&self) -> &dyn DateFormatter {
        self.formatter.as_ref()
    }

    pub fn format(&self, date: NaiveDate, profile: FormatProfile) -> String {
        self.formatter.format(date, profile)
    }

    /// `true` when selection is currently allowed.
    pub fn is_editable(&self) -> bool {
        !self.is_disabled && !self.is_read_only
    }

    pub fn is_out_of_bounds(&self, date: NaiveDate) -> bool {
        date::is_invalid_date_range(Some(date), self.min_date, self.max_date)
    }

    pub fn set_focused(&mut self, is_focused: bool) {
        self.is_focused = is_focused;
    }

    /// Shows the month containing `date`. Announces the new month when the calendar does not
    /// hold keyboard focus.
    pub fn set_current_month(&mut self, date: NaiveDate) {
        let month = date::start_of_month(date);
        if month == self.current_month {
            return;
        }
        self.current_month = month;
        self.grid = MonthGrid::new(month, self.grid.week_start());
        tracing::trace!(%month, rows = self.grid.rows(), "regenerated month grid");
        if !self.is_focused {
            let label = self.format(month, FormatProfile::MonthYear);
            self.announcer.announce(&label);
        }
    }

    /// Moves focus without applying bounds; used for pointer focus on an enabled cell.
    pub fn set_focused_date(&mut self, date: NaiveDate) {
        if !date::is_same_month(date, self.current_month) {
            self.set_current_month(date);
        }
        self.focused_date = date;
    }

    /// Focuses `date`, switching months if needed.
    ///
    /// Out-of-bounds targets are clamped to the nearest bound that shares their month; a target
    /// whose month contains no bound is ignored.
    pub fn focus_cell(&mut self, date: NaiveDate) {
        if !self.is_out_of_bounds(date) {
            self.set_focused_date(date);
            return;
        }

        let same_month = [self.min_date, self.max_date]
            .into_iter()
            .flatten()
            .filter(|bound| date::is_same_month(date, *bound))
            .map(Some);
        let Some(clamped) = date::closest_to(Some(date), same_month) else {
            tracing::debug!(%date, "focus target outside bounds; ignoring");
            return;
        };
        tracing::debug!(%date, %clamped, "clamping focus to bound");
        self.set_focused_date(clamped);
    }

    pub fn focus_next_day(&mut self) {
        self.focus_cell(date::add_days(self.focused_date, 1));
    }

    pub fn focus_previous_day(&mut self) {
        self.focus_cell(date::sub_days(self.focused_date, 1));
    }

    pub fn focus_next_week(&mut self) {
        self.focus_cell(date::add_weeks(self.focused_date, 1));
    }

    pub fn focus_previous_week(&mut self) {
        self.focus_cell(date::sub_weeks(self.focused_date, 1));
    }

    pub fn focus_next_month(&mut self) {
        self.focus_cell(date::add_months(self.focused_date, 1));
    }

    pub fn focus_previous_month(&mut self) {
        self.focus_cell(date::sub_months(self.focused_date, 1));
    }

    pub fn focus_next_year(&mut self) {
        self.focus_cell(date::add_years(self.focused_date, 1));
    }

    pub fn focus_previous_year(&mut self) {
        self.focus_cell(date::sub_years(self.focused_date, 1));
    }

    pub fn focus_start_of_month(&mut self) {
        self.focus_cell(date::start_of_month(self.focused_date));
    }

    pub fn focus_end_of_month(&mut self) {
        self.focus_cell(date::end_of_month(self.focused_date));
    }

    /// Commits `date` as the value. Returns `false` (and changes nothing) when the calendar is
    /// disabled or read-only, or when `date` is out of bounds.
    pub fn set_date_value(&mut self, date: NaiveDate) -> bool {
        if !self.is_editable() {
            tracing::debug!(
                %date,
                disabled = self.is_disabled,
                read_only = self.is_read_only,
                "selection refused"
            );
            return false;
        }
        if self.is_out_of_bounds(date) {
            tracing::debug!(%date, "selection outside bounds refused");
            return false;
        }

        self.value = Some(date);
        let label = self.format(date, FormatProfile::Ordinal);
        self.announcer.announce(&format!("Selected Date: {label}"));
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&date::stringify_date(date));
        }
        true
    }

    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        self.set_date_value(date)
    }

    pub fn select_focused_date(&mut self) -> bool {
        self.set_date_value(self.focused_date)
    }

    pub(crate) fn announce(&self, message: &str) {
        self.announcer.announce(message);
    }

    /// Stores a value without announcing or notifying; used by the range calendar.
    pub(crate) fn set_value_silently(&mut self, value: Option<NaiveDate>) {
        self.value = value;
    }
}
