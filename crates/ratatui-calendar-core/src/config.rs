use crate::date::RangeValue;
use chrono::NaiveDate;
use chrono::Weekday;

/// Construction-time options for [`crate::calendar::CalendarState`].
///
/// Dates are `yyyy-MM-dd` strings; anything unparseable is treated as absent. `value` wins over
/// `default_value` when both are given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct CalendarConfig {
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
    pub is_disabled: bool,
    pub is_read_only: bool,
    pub auto_focus: bool,
    pub id: Option<String>,
    /// Overrides the formatter's week start.
    pub week_start: Option<Weekday>,
    /// Overrides the system clock's notion of "today".
    pub today: Option<NaiveDate>,
}

impl CalendarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn min_value(mut self, value: impl Into<String>) -> Self {
        self.min_value = Some(value.into());
        self
    }

    pub fn max_value(mut self, value: impl Into<String>) -> Self {
        self.max_value = Some(value.into());
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub fn read_only(mut self, is_read_only: bool) -> Self {
        self.is_read_only = is_read_only;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = Some(week_start);
        self
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

/// Construction-time options for [`crate::range::RangeCalendarState`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct RangeCalendarConfig {
    pub value: Option<RangeValue<String>>,
    pub default_value: Option<RangeValue<String>>,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
    pub is_disabled: bool,
    pub is_read_only: bool,
    pub auto_focus: bool,
    pub id: Option<String>,
    pub week_start: Option<Weekday>,
    pub today: Option<NaiveDate>,
}

impl RangeCalendarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.value = Some(RangeValue::new(start.into(), end.into()));
        self
    }

    pub fn default_value(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.default_value = Some(RangeValue::new(start.into(), end.into()));
        self
    }

    pub fn min_value(mut self, value: impl Into<String>) -> Self {
        self.min_value = Some(value.into());
        self
    }

    pub fn max_value(mut self, value: impl Into<String>) -> Self {
        self.max_value = Some(value.into());
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub fn read_only(mut self, is_read_only: bool) -> Self {
        self.is_read_only = is_read_only;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = Some(week_start);
        self
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Options for the embedded single-date calendar; only navigation-related fields carry over.
    pub(crate) fn calendar_config(&self) -> CalendarConfig {
        CalendarConfig {
            value: None,
            default_value: None,
            min_value: self.min_value.clone(),
            max_value: self.max_value.clone(),
            is_disabled: self.is_disabled,
            is_read_only: self.is_read_only,
            auto_focus: self.auto_focus,
            id: self.id.clone(),
            week_start: self.week_start,
            today: self.today,
        }
    }
}
