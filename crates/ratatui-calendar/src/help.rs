use crate::render;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui_calendar_core::keymap::Binding;
use ratatui_calendar_core::keymap::CalendarBindings;

#[derive(Clone, Debug)]
pub struct HelpBarOptions {
    pub style: Style,
    pub key_style: Style,
    pub separator: String,
    pub space: String,
}

impl Default for HelpBarOptions {
    fn default() -> Self {
        Self {
            style: Style::default(),
            key_style: Style::default(),
            separator: " • ".to_string(),
            space: " ".to_string(),
        }
    }
}

/// One-line summary of key bindings, clipped at the right edge.
#[derive(Clone, Debug, Default)]
pub struct HelpBar {
    bindings: Vec<Binding>,
    options: HelpBarOptions,
}

impl HelpBar {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self {
            bindings,
            options: HelpBarOptions::default(),
        }
    }

    pub fn with_options(bindings: Vec<Binding>, options: HelpBarOptions) -> Self {
        Self { bindings, options }
    }

    pub fn from_bindings(bindings: &CalendarBindings, is_range: bool) -> Self {
        Self::new(bindings.help(is_range))
    }

    pub fn set_bindings(&mut self, bindings: Vec<Binding>) {
        self.bindings = bindings;
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, self.options.style);

        let end = area.x + area.width;
        let mut x = area.x;
        for (i, b) in self.bindings.iter().enumerate() {
            let mut parts = Vec::with_capacity(4);
            if i > 0 {
                parts.push((self.options.separator.as_str(), self.options.style));
            }
            parts.push((b.help_key.as_str(), self.options.key_style));
            parts.push((self.options.space.as_str(), self.options.style));
            parts.push((b.help_desc.as_str(), self.options.style));
            for (text, style) in parts {
                x += render::render_str_clipped(x, area.y, end - x, buf, text, style);
                if x >= end {
                    return;
                }
            }
        }
    }
}
