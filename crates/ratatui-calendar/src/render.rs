use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn str_width(input: &str) -> usize {
    UnicodeWidthStr::width(input)
}

/// Writes `input` starting at `(x, y)`, stopping before it would exceed `max_cols` columns.
/// Returns the number of columns written.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];
    for ch in input.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if dx + w > max_cols {
            break;
        }
        let s = ch.encode_utf8(&mut tmp);
        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_style(style);
            cell.set_symbol(s);
        }
        if w == 2 {
            if let Some(cell) = buf.cell_mut((x + dx + 1, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
        }
        dx += w;
    }
    dx
}

/// Centers `input` on the first row of `area`; a slack column goes to the left.
pub fn render_str_centered(area: Rect, buf: &mut Buffer, input: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let w = str_width(input).min(area.width as usize) as u16;
    let pad = (area.width - w).div_ceil(2);
    render_str_clipped(area.x + pad, area.y, area.width - pad, buf, input, style);
}

/// The first `max_cols` columns of `input`, never splitting a wide character.
pub fn truncate_cols(input: &str, max_cols: usize) -> &str {
    let mut cols = 0usize;
    for (idx, ch) in input.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if cols + w > max_cols {
            return &input[..idx];
        }
        cols += w;
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn centered_labels_lean_right_on_odd_slack() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        render_str_centered(Rect::new(0, 0, 3, 1), &mut buf, "7", Style::default());
        assert_eq!(row(&buf, 0), " 7 ");
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        render_str_centered(Rect::new(0, 0, 3, 1), &mut buf, "17", Style::default());
        assert_eq!(row(&buf, 0), " 17");
    }

    #[test]
    fn clipping_respects_wide_chars() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let written = render_str_clipped(0, 0, 3, &mut buf, "你好", Style::default());
        assert_eq!(written, 2);
        assert_eq!(truncate_cols("你好", 3), "你");
        assert_eq!(truncate_cols("Mon", 2), "Mo");
    }
}
