//! Key bindings for calendar navigation.
//!
//! Defaults follow the usual grid conventions: arrows move by day/week, PageUp/PageDown by month
//! (with Shift, by year), Home/End jump to the month boundaries, Enter/Space select, and Esc
//! abandons an in-progress range. `h`/`j`/`k`/`l` mirror the arrows.
use crate::cell::DateGridState;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// A help entry: the keys that trigger it plus how to describe it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyEvent>,
    pub help_key: String,
    pub help_desc: String,
}

impl Binding {
    pub fn new(
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
        keys: Vec<KeyEvent>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            help_desc: help_desc.into(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys.iter().any(|k| key_event_matches(k, event))
    }
}

pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && pattern.modifiers == event.modifiers
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

pub fn key_shift(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code).with_modifiers(KeyModifiers::shift())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarAction {
    NextDay,
    PreviousDay,
    NextWeek,
    PreviousWeek,
    NextMonth,
    PreviousMonth,
    NextYear,
    PreviousYear,
    StartOfMonth,
    EndOfMonth,
    Select,
    Cancel,
}

/// What applying an action did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Ignored,
    Moved,
    Selected,
}

#[derive(Clone, Debug)]
pub struct CalendarBindings {
    pub next_day: Vec<KeyEvent>,
    pub previous_day: Vec<KeyEvent>,
    pub next_week: Vec<KeyEvent>,
    pub previous_week: Vec<KeyEvent>,
    pub next_month: Vec<KeyEvent>,
    pub previous_month: Vec<KeyEvent>,
    pub next_year: Vec<KeyEvent>,
    pub previous_year: Vec<KeyEvent>,
    pub start_of_month: Vec<KeyEvent>,
    pub end_of_month: Vec<KeyEvent>,
    pub select: Vec<KeyEvent>,
    pub cancel: Vec<KeyEvent>,
}

impl Default for CalendarBindings {
    fn default() -> Self {
        Self {
            next_day: vec![key(KeyCode::Right), key_char('l')],
            previous_day: vec![key(KeyCode::Left), key_char('h')],
            next_week: vec![key(KeyCode::Down), key_char('j')],
            previous_week: vec![key(KeyCode::Up), key_char('k')],
            next_month: vec![key(KeyCode::PageDown)],
            previous_month: vec![key(KeyCode::PageUp)],
            next_year: vec![key_shift(KeyCode::PageDown)],
            previous_year: vec![key_shift(KeyCode::PageUp)],
            start_of_month: vec![key(KeyCode::Home)],
            end_of_month: vec![key(KeyCode::End)],
            select: vec![key(KeyCode::Enter), key_char(' ')],
            cancel: vec![key(KeyCode::Esc)],
        }
    }
}

impl CalendarBindings {
    fn table(&self) -> [(&[KeyEvent], CalendarAction); 12] {
        [
            (self.next_day.as_slice(), CalendarAction::NextDay),
            (self.previous_day.as_slice(), CalendarAction::PreviousDay),
            (self.next_week.as_slice(), CalendarAction::NextWeek),
            (self.previous_week.as_slice(), CalendarAction::PreviousWeek),
            (self.next_month.as_slice(), CalendarAction::NextMonth),
            (self.previous_month.as_slice(), CalendarAction::PreviousMonth),
            (self.next_year.as_slice(), CalendarAction::NextYear),
            (self.previous_year.as_slice(), CalendarAction::PreviousYear),
            (self.start_of_month.as_slice(), CalendarAction::StartOfMonth),
            (self.end_of_month.as_slice(), CalendarAction::EndOfMonth),
            (self.select.as_slice(), CalendarAction::Select),
            (self.cancel.as_slice(), CalendarAction::Cancel),
        ]
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<CalendarAction> {
        self.table()
            .into_iter()
            .find(|(keys, _)| keys.iter().any(|p| key_event_matches(p, key)))
            .map(|(_, action)| action)
    }

    pub fn apply<S: DateGridState + ?Sized>(
        &self,
        state: &mut S,
        action: CalendarAction,
    ) -> ActionOutcome {
        let before = (
            state.calendar().focused_date(),
            state.calendar().current_month(),
        );
        let calendar = state.calendar_mut();
        match action {
            CalendarAction::NextDay => calendar.focus_next_day(),
            CalendarAction::PreviousDay => calendar.focus_previous_day(),
            CalendarAction::NextWeek => calendar.focus_next_week(),
            CalendarAction::PreviousWeek => calendar.focus_previous_week(),
            CalendarAction::NextMonth => calendar.focus_next_month(),
            CalendarAction::PreviousMonth => calendar.focus_previous_month(),
            CalendarAction::NextYear => calendar.focus_next_year(),
            CalendarAction::PreviousYear => calendar.focus_previous_year(),
            CalendarAction::StartOfMonth => calendar.focus_start_of_month(),
            CalendarAction::EndOfMonth => calendar.focus_end_of_month(),
            CalendarAction::Select => {
                let focused = calendar.focused_date();
                return if state.select(focused) {
                    ActionOutcome::Selected
                } else {
                    ActionOutcome::Ignored
                };
            }
            CalendarAction::Cancel => {
                return if state.cancel_selection() {
                    ActionOutcome::Moved
                } else {
                    ActionOutcome::Ignored
                };
            }
        }
        let after = (
            state.calendar().focused_date(),
            state.calendar().current_month(),
        );
        if before == after {
            ActionOutcome::Ignored
        } else {
            ActionOutcome::Moved
        }
    }

    /// Dispatches `key` if it is bound; unbound keys are `Ignored`.
    pub fn handle_key<S: DateGridState + ?Sized>(
        &self,
        state: &mut S,
        key: &KeyEvent,
    ) -> ActionOutcome {
        match self.action_for(key) {
            Some(action) => self.apply(state, action),
            None => ActionOutcome::Ignored,
        }
    }

    /// Entries for a help bar.
    pub fn help(&self, is_range: bool) -> Vec<Binding> {
        let mut out = vec![
            Binding::new("←↓↑→", "day/week", self.next_day.clone()),
            Binding::new("PgUp/PgDn", "month", self.next_month.clone()),
            Binding::new("S-PgUp/PgDn", "year", self.next_year.clone()),
            Binding::new("Home/End", "month start/end", self.start_of_month.clone()),
            Binding::new("Enter", "select", self.select.clone()),
        ];
        if is_range {
            out.push(Binding::new("Esc", "cancel range", self.cancel.clone()));
        }
        out
    }
}
