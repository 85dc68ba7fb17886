//! `ratatui-calendar` renders the headless calendar state from `ratatui-calendar-core` with
//! ratatui.
//!
//! The state types are re-exported unchanged; this crate adds [`calendar_view::CalendarView`]
//! (grid rendering plus key/mouse dispatch), a [`help::HelpBar`] for the default bindings and a
//! [`live_region::LiveRegion`] that shows the latest screen-reader announcement.
pub use ratatui_calendar_core::announce;
pub use ratatui_calendar_core::calendar;
pub use ratatui_calendar_core::cell;
pub use ratatui_calendar_core::config;
pub use ratatui_calendar_core::date;
pub use ratatui_calendar_core::format;
pub use ratatui_calendar_core::grid;
pub use ratatui_calendar_core::input;
pub use ratatui_calendar_core::keymap;
pub use ratatui_calendar_core::range;

#[cfg(feature = "crossterm")]
pub use ratatui_calendar_core::crossterm_input;

pub mod theme;

pub mod render;

pub mod calendar_view;
pub mod help;
pub mod live_region;
