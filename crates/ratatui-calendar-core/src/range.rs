//! Two-endpoint selection on top of [`CalendarState`].
//!
//! The first pick sets an anchor; the second pick commits the sorted range and clears it. While
//! an anchor is set, the highlighted range follows the focused date.
use crate::calendar::CalendarState;
use crate::config::RangeCalendarConfig;
use crate::date;
use crate::date::DateRange;
use crate::date::RangeValue;
use crate::format::FormatProfile;
use chrono::NaiveDate;
use std::fmt;

/// Result of [`RangeCalendarState::select_date`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeSelection {
    Ignored,
    Anchored(NaiveDate),
    Committed(DateRange),
}

pub struct RangeCalendarState {
    calendar: CalendarState,
    value: Option<DateRange>,
    anchor_date: Option<NaiveDate>,
    on_change: Option<Box<dyn FnMut(&RangeValue<String>)>>,
}

impl fmt::Debug for RangeCalendarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeCalendarState")
            .field("calendar", &self.calendar)
            .field("value", &self.value)
            .field("anchor_date", &self.anchor_date)
            .finish_non_exhaustive()
    }
}

impl Default for RangeCalendarState {
    fn default() -> Self {
        Self::new(RangeCalendarConfig::default())
    }
}

impl RangeCalendarState {
    pub fn new(config: RangeCalendarConfig) -> Self {
        let value = date::parse_date_range(config.value.as_ref())
            .or_else(|| date::parse_date_range(config.default_value.as_ref()));
        let mut base = config.calendar_config();
        base.value = value.map(|range| date::stringify_date(range.start()));

        Self {
            calendar: CalendarState::new(base),
            value,
            anchor_date: None,
            on_change: None,
        }
    }

    /// Wraps an already configured calendar (announcer, formatter) for range selection.
    pub fn from_calendar(calendar: CalendarState) -> Self {
        let value = calendar.value().map(|d| DateRange::new(d, d));
        Self {
            calendar,
            value,
            anchor_date: None,
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, on_change: impl FnMut(&RangeValue<String>) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut CalendarState {
        &mut self.calendar
    }

    pub fn into_calendar(self) -> CalendarState {
        self.calendar
    }

    pub fn value(&self) -> Option<DateRange> {
        self.value
    }

    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.anchor_date
    }

    pub fn set_anchor_date(&mut self, anchor: Option<NaiveDate>) {
        self.anchor_date = anchor;
    }

    /// In-progress span (anchor to focus) while selecting, otherwise the committed range.
    pub fn highlighted_range(&self) -> Option<DateRange> {
        match self.anchor_date {
            Some(anchor) => Some(DateRange::new(anchor, self.calendar.focused_date())),
            None => self.value,
        }
    }

    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        self.highlighted_range().is_some_and(|r| r.contains(date))
    }

    pub fn is_range_start(&self, date: NaiveDate) -> bool {
        self.highlighted_range().is_some_and(|r| r.start() == date)
    }

    pub fn is_range_end(&self, date: NaiveDate) -> bool {
        self.highlighted_range().is_some_and(|r| r.end() == date)
    }

    /// Anchors or finishes a range.
    ///
    /// Refused when the calendar is disabled or read-only, or when either endpoint is out of
    /// bounds; a refused finish keeps the anchor.
    pub fn select_date(&mut self, date: NaiveDate) -> RangeSelection {
        if !self.calendar.is_editable() {
            tracing::debug!(%date, "range selection refused: calendar not editable");
            return RangeSelection::Ignored;
        }
        if self.calendar.is_out_of_bounds(date) {
            tracing::debug!(%date, anchor = ?self.anchor_date, "range endpoint outside bounds");
            return RangeSelection::Ignored;
        }

        let Some(anchor) = self.anchor_date else {
            self.anchor_date = Some(date);
            return RangeSelection::Anchored(date);
        };
        if self.calendar.is_out_of_bounds(anchor) {
            tracing::debug!(%anchor, "range anchor outside bounds");
            return RangeSelection::Ignored;
        }

        let range = DateRange::new(anchor, date);
        self.value = Some(range);
        self.anchor_date = None;
        self.calendar.set_value_silently(Some(range.start()));

        let start = self.calendar.format(range.start(), FormatProfile::Ordinal);
        let end = self.calendar.format(range.end(), FormatProfile::Ordinal);
        self.calendar.announce(&format!("Selected Range: {start} to {end}"));
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&range.to_strings());
        }
        RangeSelection::Committed(range)
    }

    pub fn select_focused_date(&mut self) -> RangeSelection {
        self.select_date(self.calendar.focused_date())
    }

    /// Drops an in-progress anchor. Returns `true` if there was one.
    pub fn cancel_selection(&mut self) -> bool {
        self.anchor_date.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::announce::AnnouncementQueue;
    use crate::config::CalendarConfig;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn range_calendar(config: RangeCalendarConfig) -> RangeCalendarState {
        RangeCalendarState::new(config.today(d(2024, 5, 15)))
    }

    #[test]
    fn reversed_picks_commit_sorted_range() {
        let mut s = range_calendar(RangeCalendarConfig::new());
        assert_eq!(
            s.select_date(d(2024, 5, 10)),
            RangeSelection::Anchored(d(2024, 5, 10))
        );
        assert_eq!(s.value(), None);
        let got = s.select_date(d(2024, 5, 5));
        let expected = DateRange::new(d(2024, 5, 5), d(2024, 5, 10));
        assert_eq!(got, RangeSelection::Committed(expected));
        assert_eq!(s.value(), Some(expected));
        assert_eq!(s.anchor_date(), None);
        assert_eq!(s.calendar().value(), Some(d(2024, 5, 5)));
    }

    #[test]
    fn highlight_follows_focus_while_anchored() {
        let mut s = range_calendar(RangeCalendarConfig::new());
        s.select_date(d(2024, 5, 15));
        s.calendar_mut().focus_previous_week();
        let hl = s.highlighted_range().unwrap();
        assert_eq!((hl.start(), hl.end()), (d(2024, 5, 8), d(2024, 5, 15)));
        assert!(s.is_range_start(d(2024, 5, 8)));
        assert!(s.is_range_end(d(2024, 5, 15)));
        assert!(s.is_in_range(d(2024, 5, 10)));
        assert!(!s.is_in_range(d(2024, 5, 16)));
    }

    #[test]
    fn highlight_falls_back_to_committed_value() {
        let s = range_calendar(RangeCalendarConfig::new().value("2024-05-01", "2024-05-03"));
        assert_eq!(
            s.highlighted_range(),
            Some(DateRange::new(d(2024, 5, 1), d(2024, 5, 3)))
        );
        assert_eq!(s.calendar().focused_date(), d(2024, 5, 1));
    }

    #[test]
    fn out_of_bounds_finish_keeps_anchor() {
        let mut s = range_calendar(
            RangeCalendarConfig::new()
                .min_value("2024-05-03")
                .max_value("2024-05-25"),
        );
        s.select_date(d(2024, 5, 10));
        assert_eq!(s.select_date(d(2024, 5, 28)), RangeSelection::Ignored);
        assert_eq!(s.anchor_date(), Some(d(2024, 5, 10)));
        assert_eq!(s.value(), None);
        assert_eq!(s.select_date(d(2024, 5, 1)), RangeSelection::Ignored);
        assert!(matches!(
            s.select_date(d(2024, 5, 20)),
            RangeSelection::Committed(_)
        ));
    }

    #[test]
    fn out_of_bounds_anchor_cannot_finish() {
        let mut s = range_calendar(RangeCalendarConfig::new().max_value("2024-05-25"));
        s.set_anchor_date(Some(d(2024, 6, 1)));
        assert_eq!(s.select_date(d(2024, 5, 20)), RangeSelection::Ignored);
        assert_eq!(s.anchor_date(), Some(d(2024, 6, 1)));
    }

    #[test]
    fn read_only_refuses_anchor() {
        let mut s = range_calendar(RangeCalendarConfig::new().read_only(true));
        assert_eq!(s.select_focused_date(), RangeSelection::Ignored);
        assert_eq!(s.anchor_date(), None);
    }

    #[test]
    fn commit_announces_and_notifies() {
        let queue = AnnouncementQueue::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let calendar = CalendarState::new(CalendarConfig::new().today(d(2024, 5, 15)))
            .with_announcer(queue.clone());
        let mut s = RangeCalendarState::from_calendar(calendar)
            .with_on_change(move |v: &RangeValue<String>| sink.borrow_mut().push(v.clone()));

        s.select_focused_date();
        s.calendar_mut().focus_next_day();
        s.calendar_mut().focus_next_day();
        s.select_focused_date();

        assert_eq!(
            queue.drain(),
            vec!["Selected Range: 15th May 2024 to 17th May 2024".to_string()]
        );
        assert_eq!(
            *seen.borrow(),
            vec![RangeValue::new(
                "2024-05-15".to_string(),
                "2024-05-17".to_string()
            )]
        );
    }

    #[test]
    fn cancel_clears_anchor() {
        let mut s = range_calendar(RangeCalendarConfig::new());
        assert!(!s.cancel_selection());
        s.select_focused_date();
        assert!(s.cancel_selection());
        assert_eq!(s.highlighted_range(), None);
    }
}
