//! `ratatui-calendar-core` is the headless half of the calendar widgets: date arithmetic, month
//! grids, and the focus/selection state machines that keyboard and pointer input drive.
//!
//! Nothing here renders. A view reads [`calendar::CalendarState::days_in_month`] plus the
//! per-cell flags from [`cell::calendar_cell`], and forwards input to the state (directly or via
//! [`keymap::CalendarBindings`]).
//!
//! ## Design goals
//!
//! - Event-loop agnostic: every operation runs to completion on the caller's thread.
//! - Total operations: refused navigation or selection is a no-op, never an error.
//! - Collaborators are injected: text comes from a [`format::DateFormatter`], screen-reader
//!   messages go to an [`announce::Announcer`], and commits are reported through `on_change`.
//!
//! ## Getting started
//!
//! - [`calendar::CalendarState`]: single-date calendar.
//! - [`range::RangeCalendarState`]: two-endpoint selection layered on a calendar.
//! - [`date`]: the arithmetic helpers both are built on.
pub mod announce;
pub mod calendar;
pub mod cell;
pub mod config;
pub mod date;
pub mod format;
pub mod grid;
pub mod range;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod input;
pub mod keymap;
