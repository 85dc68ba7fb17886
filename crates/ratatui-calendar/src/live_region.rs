use crate::render;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui_calendar_core::announce::AnnouncementQueue;

/// Shows the most recent announcement from a shared [`AnnouncementQueue`].
///
/// Give a clone of the queue to the calendar via `with_announcer` and render this where a
/// status line would go.
#[derive(Clone, Debug, Default)]
pub struct LiveRegion {
    queue: AnnouncementQueue,
    style: Style,
}

impl LiveRegion {
    pub fn new(queue: AnnouncementQueue) -> Self {
        Self {
            queue,
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn queue(&self) -> &AnnouncementQueue {
        &self.queue
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, self.style);
        if let Some(message) = self.queue.latest() {
            render::render_str_clipped(area.x, area.y, area.width, buf, &message, self.style);
        }
    }
}
