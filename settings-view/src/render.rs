//! Plain-text rendering of bound rows for character-cell hosts.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::row::{BarControl, RowControl, RowView};

/// Glyph shown in the icon slot of rows that carry an icon.
pub const ICON_GLYPH: &str = "◆";
/// Cells used by the bar gauge, brackets excluded.
pub const GAUGE_WIDTH: usize = 10;

pub fn display_width(s: &str) -> usize {
    s.width()
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` cells, ending with an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

/// Bar gauge such as `[=====-----]`.
pub fn gauge(bar: &BarControl) -> String {
    let span = i64::from(bar.max) - i64::from(bar.min);
    let filled = if span <= 0 {
        0
    } else {
        let done = (i64::from(bar.progress) - i64::from(bar.min)).clamp(0, span);
        (done * GAUGE_WIDTH as i64 / span) as usize
    };
    format!("[{}{}]", "=".repeat(filled), "-".repeat(GAUGE_WIDTH - filled))
}

/// The right-hand side of a row: value text and control glyph.
fn value_part(row: &RowView) -> String {
    let text = if row.is_text_visible() { row.text() } else { "" };
    let glyph = match row.control() {
        RowControl::None => String::new(),
        RowControl::Switch(switch) => {
            if switch.checked { "[x]".to_string() } else { "[ ]".to_string() }
        }
        RowControl::Spinner(spinner) => {
            let option = spinner.options.get(spinner.selected).map_or("", String::as_str);
            format!("< {option} >")
        }
        RowControl::Bar(bar) => gauge(bar),
    };

    match (text.is_empty(), glyph.is_empty()) {
        (true, _) => glyph,
        (false, true) => text.to_string(),
        (false, false) => format!("{text} {glyph}"),
    }
}

/// Render `row` as one line exactly `width` cells wide.
///
/// The icon slot and title are left aligned, the value and control right
/// aligned. The title is truncated first when space runs out.
pub fn render_row(row: &RowView, width: usize) -> String {
    let icon = if row.is_icon_visible() { ICON_GLYPH } else { " " };
    let left = format!("{icon} {}", row.title());
    let right = truncate_to_width(&value_part(row), width);

    let right_width = display_width(&right);
    let gap = if right_width == 0 { 0 } else { 1 };
    let left = truncate_to_width(&left, width.saturating_sub(right_width + gap));
    let padding = width.saturating_sub(display_width(&left) + right_width);

    format!("{left}{}{right}", " ".repeat(padding))
}
