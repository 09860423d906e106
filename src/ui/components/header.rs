//! Header component renderer.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row` and returns the next free row.
///
/// The title is centered; the display mode label sits at the right edge when
/// the line is wide enough to hold both.
///
/// ```text
/// [padding] TITLE [padding] [Dark]
/// ```
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    let label = format!("[{}] ", header.mode_label);
    let title_len = helpers::width(&header.title);
    let label_len = helpers::width(&label);

    if title_len + 2 * label_len <= cols {
        let padding = cols.saturating_sub(title_len) / 2;
        out.push_str(&" ".repeat(padding));
        out.push_str(&header.title);
        helpers::pad_to(out, padding + title_len + label_len, cols);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&label);
    } else {
        helpers::centered(out, &header.title, cols);
    }

    out.push_str(Theme::reset());
    row + 1
}
