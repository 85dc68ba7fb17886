use crate::render;
use crate::theme::CalendarTheme;
use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui_calendar_core::cell;
use ratatui_calendar_core::cell::CalendarCell;
use ratatui_calendar_core::cell::DateGridState;
use ratatui_calendar_core::format::FormatProfile;
use ratatui_calendar_core::input::InputEvent;
use ratatui_calendar_core::input::MouseButton;
use ratatui_calendar_core::input::MouseEvent;
use ratatui_calendar_core::input::MouseEventKind;
use ratatui_calendar_core::keymap::ActionOutcome;
use ratatui_calendar_core::keymap::CalendarBindings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarViewAction {
    None,
    Redraw,
    /// The committed value (or range anchor) changed.
    SelectionChanged,
}

#[derive(Clone, Debug)]
pub struct CalendarViewOptions {
    /// Columns per day cell; at least 2.
    pub cell_width: u16,
    pub show_header: bool,
    pub show_week_days: bool,
    /// Render adjacent-month filler days instead of leaving them blank.
    pub show_outside_days: bool,
    pub prev_symbol: String,
    pub next_symbol: String,
    pub bindings: CalendarBindings,
}

impl Default for CalendarViewOptions {
    fn default() -> Self {
        Self {
            cell_width: 3,
            show_header: true,
            show_week_days: true,
            show_outside_days: true,
            prev_symbol: "‹".to_string(),
            next_symbol: "›".to_string(),
            bindings: CalendarBindings::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CalendarLayout {
    prev: Option<Rect>,
    next: Option<Rect>,
    grid: Rect,
    cell_width: u16,
    /// Month shown by the render this layout came from.
    month: NaiveDate,
}

/// Month grid widget. Holds only view options and the last layout (for mouse hit-testing); the
/// calendar state is passed in on every call.
#[derive(Clone, Debug, Default)]
pub struct CalendarView {
    options: CalendarViewOptions,
    layout: Option<CalendarLayout>,
}

impl CalendarView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CalendarViewOptions) -> Self {
        Self {
            options,
            layout: None,
        }
    }

    pub fn options(&self) -> &CalendarViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CalendarViewOptions) {
        self.options = options;
        self.layout = None;
    }

    /// Configured width, clamped so that a full week still fits in `u16` columns.
    fn cell_width(&self) -> u16 {
        self.options.cell_width.clamp(2, u16::MAX / 7)
    }

    /// Width and height needed to show `rows` weeks without clipping.
    pub fn desired_size(&self, rows: usize) -> (u16, u16) {
        let chrome = u16::from(self.options.show_header) + u16::from(self.options.show_week_days);
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        (self.cell_width() * 7, chrome.saturating_add(rows))
    }

    pub fn render<S: DateGridState + ?Sized>(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &CalendarTheme,
        state: &S,
    ) {
        self.layout = None;
        if area.width == 0 || area.height == 0 {
            return;
        }

        let calendar = state.calendar();
        let cw = self.cell_width();
        let width = area.width.min(cw * 7);
        let right = area.x.saturating_add(width);
        let bottom = area.bottom();
        let mut y = area.y;
        buf.set_style(Rect::new(area.x, area.y, width, area.height), theme.day);

        let mut prev = None;
        let mut next = None;
        if self.options.show_header && y < bottom {
            let row = Rect::new(area.x, y, width, 1);
            let title = calendar.format(calendar.current_month(), FormatProfile::MonthYear);
            render::render_str_centered(row, buf, &title, theme.header);

            let prev_w = render::str_width(&self.options.prev_symbol) as u16;
            let next_w = render::str_width(&self.options.next_symbol) as u16;
            if prev_w.saturating_add(next_w) < width {
                let nav = theme.nav;
                render::render_str_clipped(row.x, y, prev_w, buf, &self.options.prev_symbol, nav);
                let next_x = right - next_w;
                render::render_str_clipped(next_x, y, next_w, buf, &self.options.next_symbol, nav);
                prev = Some(Rect::new(row.x, y, prev_w, 1));
                next = Some(Rect::new(next_x, y, next_w, 1));
            }
            y += 1;
        }

        if self.options.show_week_days && y < bottom {
            for (col, day) in calendar.week_days().iter().enumerate() {
                let x = area.x.saturating_add(col as u16 * cw);
                if x >= right {
                    break;
                }
                let cell_area = Rect::new(x, y, cw.min(right - x), 1);
                let abbr = render::truncate_cols(&day.abbr, usize::from(cw - 1));
                render::render_str_centered(cell_area, buf, abbr, theme.week_day);
            }
            y += 1;
        }

        let grid = Rect::new(area.x, y, width, bottom.saturating_sub(y));
        for (row, week) in calendar.days_in_month().iter().enumerate() {
            let row_y = y.saturating_add(row as u16);
            if row_y >= bottom {
                break;
            }
            for (col, date) in week.iter().enumerate() {
                let x = area.x.saturating_add(col as u16 * cw);
                if x >= right {
                    break;
                }
                let cell_area = Rect::new(x, row_y, cw.min(right - x), 1);
                let cell = cell::calendar_cell(state, *date);
                self.render_cell(cell_area, buf, theme, &cell);
            }
        }

        self.layout = Some(CalendarLayout {
            prev,
            next,
            grid,
            cell_width: cw,
            month: calendar.current_month(),
        });
    }

    fn render_cell(
        &self,
        area: Rect,
        buf: &mut Buffer,
        theme: &CalendarTheme,
        cell: &CalendarCell,
    ) {
        if !cell.is_current_month && !self.options.show_outside_days {
            return;
        }
        let style = cell_style(theme, cell);
        buf.set_style(area, style);
        render::render_str_centered(area, buf, &cell.label, style);
    }

    /// The date drawn at terminal position `(x, y)` in the last render.
    ///
    /// `None` once the state has moved to another month since that render.
    pub fn date_at<S: DateGridState + ?Sized>(
        &self,
        state: &S,
        x: u16,
        y: u16,
    ) -> Option<NaiveDate> {
        let layout = self.layout?;
        if layout.month != state.calendar().current_month() {
            return None;
        }
        if !rect_contains(layout.grid, x, y) {
            return None;
        }
        let row = usize::from(y - layout.grid.y);
        let col = usize::from((x - layout.grid.x) / layout.cell_width);
        state.calendar().grid().date_at(row, col)
    }

    pub fn handle_event<S: DateGridState + ?Sized>(
        &mut self,
        event: InputEvent,
        state: &mut S,
    ) -> CalendarViewAction {
        match event {
            InputEvent::Key(key) => match self.options.bindings.handle_key(state, &key) {
                ActionOutcome::Ignored => CalendarViewAction::None,
                ActionOutcome::Moved => CalendarViewAction::Redraw,
                ActionOutcome::Selected => CalendarViewAction::SelectionChanged,
            },
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse, state),
            InputEvent::FocusGained => {
                state.calendar_mut().set_focused(true);
                CalendarViewAction::Redraw
            }
            InputEvent::FocusLost => {
                state.calendar_mut().set_focused(false);
                CalendarViewAction::Redraw
            }
        }
    }

    fn handle_mouse<S: DateGridState + ?Sized>(
        &mut self,
        mouse: MouseEvent,
        state: &mut S,
    ) -> CalendarViewAction {
        let Some(layout) = self.layout else {
            return CalendarViewAction::None;
        };
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Header buttons take focus away from the grid, so the month change is announced.
                if layout.prev.is_some_and(|r| rect_contains(r, mouse.x, mouse.y)) {
                    let calendar = state.calendar_mut();
                    calendar.set_focused(false);
                    calendar.focus_previous_month();
                    return CalendarViewAction::Redraw;
                }
                if layout.next.is_some_and(|r| rect_contains(r, mouse.x, mouse.y)) {
                    let calendar = state.calendar_mut();
                    calendar.set_focused(false);
                    calendar.focus_next_month();
                    return CalendarViewAction::Redraw;
                }
                let Some(date) = self.date_at(state, mouse.x, mouse.y) else {
                    return CalendarViewAction::None;
                };
                if cell::is_cell_disabled(state, date) {
                    return CalendarViewAction::None;
                }
                state.calendar_mut().set_focused(true);
                if cell::press_cell(state, date) {
                    CalendarViewAction::SelectionChanged
                } else {
                    CalendarViewAction::Redraw
                }
            }
            MouseEventKind::ScrollUp if self.is_over(mouse) => {
                state.calendar_mut().focus_previous_month();
                CalendarViewAction::Redraw
            }
            MouseEventKind::ScrollDown if self.is_over(mouse) => {
                state.calendar_mut().focus_next_month();
                CalendarViewAction::Redraw
            }
            _ => CalendarViewAction::None,
        }
    }

    fn is_over(&self, mouse: MouseEvent) -> bool {
        self.layout.is_some_and(|l| {
            rect_contains(l.grid, mouse.x, mouse.y)
                || l.prev.is_some_and(|r| r.y == mouse.y)
                || l.next.is_some_and(|r| r.y == mouse.y)
        })
    }
}

fn rect_contains(r: Rect, x: u16, y: u16) -> bool {
    x >= r.x && x < r.right() && y >= r.y && y < r.bottom()
}

fn cell_style(theme: &CalendarTheme, cell: &CalendarCell) -> Style {
    let mut style = if !cell.is_current_month {
        theme.outside_month
    } else if cell.is_disabled {
        theme.disabled
    } else {
        theme.day
    };
    if cell.is_highlighted && !cell.is_disabled {
        style = style.patch(theme.range);
    }
    if cell.is_selected || cell.is_range_start || cell.is_range_end {
        style = style.patch(theme.selected);
    }
    if cell.is_today {
        style = style.patch(theme.today);
    }
    if cell.is_focused {
        style = style.patch(theme.focused);
    } else if cell.tab_index == Some(0) {
        style = style.patch(theme.focus_target);
    }
    style
}
