//! Per-cell derived state and pointer handling.
//!
//! Renderers should not recompute disabled/selected/focused flags themselves; they call
//! [`calendar_cell`] for each date of the grid and style from the result.
use crate::calendar::CalendarState;
use crate::date;
use crate::date::DateRange;
use crate::format::FormatProfile;
use crate::range::RangeCalendarState;
use crate::range::RangeSelection;
use chrono::NaiveDate;

/// Common surface of [`CalendarState`] and [`RangeCalendarState`] for views and key bindings.
pub trait DateGridState {
    fn calendar(&self) -> &CalendarState;

    fn calendar_mut(&mut self) -> &mut CalendarState;

    fn is_range_calendar(&self) -> bool {
        false
    }

    fn anchor_date(&self) -> Option<NaiveDate> {
        None
    }

    fn highlighted_range(&self) -> Option<DateRange> {
        None
    }

    /// `true` if `date` is part of the committed value.
    fn is_date_selected(&self, date: NaiveDate) -> bool;

    /// Selects `date`; returns `true` if the state advanced.
    fn select(&mut self, date: NaiveDate) -> bool;

    /// Abandons an in-progress selection; returns `true` if there was one.
    fn cancel_selection(&mut self) -> bool {
        false
    }
}

impl DateGridState for CalendarState {
    fn calendar(&self) -> &CalendarState {
        self
    }

    fn calendar_mut(&mut self) -> &mut CalendarState {
        self
    }

    fn is_date_selected(&self, date: NaiveDate) -> bool {
        self.value() == Some(date)
    }

    fn select(&mut self, date: NaiveDate) -> bool {
        self.select_date(date)
    }
}

impl DateGridState for RangeCalendarState {
    fn calendar(&self) -> &CalendarState {
        RangeCalendarState::calendar(self)
    }

    fn calendar_mut(&mut self) -> &mut CalendarState {
        RangeCalendarState::calendar_mut(self)
    }

    fn is_range_calendar(&self) -> bool {
        true
    }

    fn anchor_date(&self) -> Option<NaiveDate> {
        RangeCalendarState::anchor_date(self)
    }

    fn highlighted_range(&self) -> Option<DateRange> {
        RangeCalendarState::highlighted_range(self)
    }

    fn is_date_selected(&self, date: NaiveDate) -> bool {
        self.value().is_some_and(|range| range.contains(date))
    }

    fn select(&mut self, date: NaiveDate) -> bool {
        self.select_date(date) != RangeSelection::Ignored
    }

    fn cancel_selection(&mut self) -> bool {
        RangeCalendarState::cancel_selection(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    /// Calendar disabled, outside the visible month, or outside the bounds.
    pub is_disabled: bool,
    pub is_selected: bool,
    /// Keyboard focus: the calendar is focused and this is the focused date.
    pub is_focused: bool,
    pub is_today: bool,
    pub is_highlighted: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    /// Visible text (numeric day).
    pub label: String,
    /// Screen-reader label.
    pub aria_label: String,
    /// `Some(0)` for the roving focus target, `Some(-1)` for other enabled cells.
    pub tab_index: Option<i8>,
}

pub fn is_cell_disabled<S: DateGridState + ?Sized>(state: &S, date: NaiveDate) -> bool {
    let calendar = state.calendar();
    calendar.is_disabled() || !calendar.grid().contains(date) || calendar.is_out_of_bounds(date)
}

pub fn calendar_cell<S: DateGridState + ?Sized>(state: &S, date: NaiveDate) -> CalendarCell {
    let calendar = state.calendar();
    let is_disabled = is_cell_disabled(state, date);
    let is_selected = state.is_date_selected(date);
    let is_focused = calendar.is_focused() && date::is_same_day(date, calendar.focused_date());
    let is_today = date::is_same_day(date, calendar.today());
    let highlight = state.highlighted_range();

    let mut aria_label = String::new();
    if is_today {
        aria_label.push_str("Today, ");
    }
    aria_label.push_str(&calendar.format(date, FormatProfile::FullDate));
    if is_selected {
        aria_label.push_str(" selected");
    }
    if state.is_range_calendar() && is_focused && !is_disabled {
        let prompt = if state.anchor_date().is_some() {
            "click to finish selecting range"
        } else {
            "click to start selecting range"
        };
        aria_label.push_str(&format!(" ({prompt})"));
    }

    let tab_index = if is_disabled {
        None
    } else if date::is_same_day(date, calendar.focused_date()) {
        Some(0)
    } else {
        Some(-1)
    };

    CalendarCell {
        date,
        is_current_month: calendar.grid().contains(date),
        is_disabled,
        is_selected,
        is_focused,
        is_today,
        is_highlighted: highlight.is_some_and(|r| r.contains(date)),
        is_range_start: highlight.is_some_and(|r| r.start() == date),
        is_range_end: highlight.is_some_and(|r| r.end() == date),
        label: calendar.format(date, FormatProfile::Day),
        aria_label,
        tab_index,
    }
}

/// Derived cells for every date of the visible grid, row by row.
pub fn calendar_cells<S: DateGridState + ?Sized>(state: &S) -> Vec<Vec<CalendarCell>> {
    state
        .calendar()
        .days_in_month()
        .iter()
        .map(|week| week.iter().map(|d| calendar_cell(state, *d)).collect())
        .collect()
}

/// Pointer activation of a cell: select, then move focus there. Disabled cells are inert.
pub fn press_cell<S: DateGridState + ?Sized>(state: &mut S, date: NaiveDate) -> bool {
    if is_cell_disabled(state, date) {
        return false;
    }
    let selected = state.select(date);
    state.calendar_mut().set_focused_date(date);
    selected
}

/// Pointer focus of a cell. Disabled cells are inert.
pub fn focus_cell_by_pointer<S: DateGridState + ?Sized>(state: &mut S, date: NaiveDate) -> bool {
    if is_cell_disabled(state, date) {
        return false;
    }
    state.calendar_mut().set_focused_date(date);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalendarConfig;
    use crate::config::RangeCalendarConfig;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn focused_calendar(config: CalendarConfig) -> CalendarState {
        CalendarState::new(config.today(d(2024, 3, 15)).auto_focus(true))
    }

    #[test]
    fn label_marks_today_and_selection() {
        let s = focused_calendar(CalendarConfig::new().value("2024-03-15"));
        let cell = calendar_cell(&s, d(2024, 3, 15));
        assert_eq!(cell.aria_label, "Today, Friday, March 15, 2024 selected");
        assert!(cell.is_today && cell.is_selected && cell.is_focused);
        assert_eq!(cell.label, "15");
        assert_eq!(cell.tab_index, Some(0));

        let other = calendar_cell(&s, d(2024, 3, 16));
        assert_eq!(other.aria_label, "Saturday, March 16, 2024");
        assert_eq!(other.tab_index, Some(-1));
    }

    #[test]
    fn filler_and_out_of_bounds_cells_are_disabled() {
        let s = focused_calendar(CalendarConfig::new().max_value("2024-03-20"));
        let filler = calendar_cell(&s, d(2024, 2, 29));
        assert!(!filler.is_current_month);
        assert!(filler.is_disabled);
        assert_eq!(filler.tab_index, None);
        assert!(calendar_cell(&s, d(2024, 3, 21)).is_disabled);
        assert!(!calendar_cell(&s, d(2024, 3, 20)).is_disabled);
    }

    #[test]
    fn range_prompt_depends_on_anchor() {
        let mut s = RangeCalendarState::new(
            RangeCalendarConfig::new()
                .today(d(2024, 5, 1))
                .auto_focus(true),
        );
        let focused = s.calendar().focused_date();
        assert_eq!(
            calendar_cell(&s, focused).aria_label,
            "Today, Wednesday, May 1, 2024 (click to start selecting range)"
        );
        s.select_focused_date();
        s.calendar_mut().focus_next_day();
        let cell = calendar_cell(&s, d(2024, 5, 2));
        assert_eq!(
            cell.aria_label,
            "Thursday, May 2, 2024 (click to finish selecting range)"
        );
        assert!(cell.is_range_end && cell.is_highlighted && !cell.is_selected);
        assert!(!calendar_cell(&s, d(2024, 5, 3)).aria_label.contains("click"));
    }

    #[test]
    fn committed_range_cells_are_selected() {
        let s = RangeCalendarState::new(
            RangeCalendarConfig::new()
                .today(d(2024, 5, 1))
                .value("2024-05-03", "2024-05-06"),
        );
        let cells = calendar_cells(&s);
        let selected: Vec<NaiveDate> = cells
            .iter()
            .flatten()
            .filter(|c| c.is_selected)
            .map(|c| c.date)
            .collect();
        assert_eq!(
            selected,
            vec![d(2024, 5, 3), d(2024, 5, 4), d(2024, 5, 5), d(2024, 5, 6)]
        );
        assert!(calendar_cell(&s, d(2024, 5, 4)).aria_label.ends_with(" selected"));
    }

    #[test]
    fn press_selects_and_focuses_enabled_cells_only() {
        let mut s = focused_calendar(CalendarConfig::new());
        assert!(press_cell(&mut s, d(2024, 3, 20)));
        assert_eq!(s.value(), Some(d(2024, 3, 20)));
        assert_eq!(s.focused_date(), d(2024, 3, 20));

        assert!(!press_cell(&mut s, d(2024, 4, 2)));
        assert_eq!(s.focused_date(), d(2024, 3, 20));
        assert!(!focus_cell_by_pointer(&mut s, d(2024, 2, 28)));
        assert!(focus_cell_by_pointer(&mut s, d(2024, 3, 1)));
        assert_eq!(s.focused_date(), d(2024, 3, 1));
    }

    #[test]
    fn press_on_read_only_still_moves_focus() {
        let mut s = focused_calendar(CalendarConfig::new().read_only(true));
        assert!(!press_cell(&mut s, d(2024, 3, 3)));
        assert_eq!(s.value(), None);
        assert_eq!(s.focused_date(), d(2024, 3, 3));
    }
}
