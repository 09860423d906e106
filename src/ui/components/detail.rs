//! Detail overlay renderer.
//!
//! Draws a framed box over the list area with the sections of a
//! [`DetailView`]. Lines longer than the box are cut. The bordering
//! countries section only appears when there are borders to list.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Widest the overlay grows on large terminals.
const MAX_BOX_WIDTH: usize = 72;

/// Styled line inside the overlay frame.
enum Line {
    Title(String),
    Label(String, String),
    Text(String),
    Blank,
}

/// Renders the overlay with its top edge at `row`, using at most `max_rows`
/// rows.
pub fn render_detail(out: &mut String, row: usize, max_rows: usize, detail: &DetailView, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(4).min(MAX_BOX_WIDTH);
    if box_width < 10 || max_rows < 3 {
        return;
    }
    let inner_width = box_width - 2;
    let left = (cols - box_width) / 2 + 1;

    let mut lines = vec![Line::Label("Flag".to_string(), detail.flag.clone()), Line::Blank];
    for section in &detail.sections {
        lines.push(Line::Title(section.title.clone()));
        for (label, value) in &section.rows {
            lines.push(Line::Label(format!("  {label}"), value.clone()));
        }
        lines.push(Line::Blank);
    }

    // An empty list also means the field was not requested, so claim nothing.
    if !detail.borders.is_empty() {
        lines.push(Line::Title("Bordering Countries".to_string()));
        lines.push(Line::Text(format!("  {}", detail.borders.join(", "))));
        lines.push(Line::Blank);
    }
    lines.push(Line::Label("Map".to_string(), detail.map_url.clone()));
    lines.push(Line::Text(
        if detail.is_favorite { "★ Favorite" } else { "☆ Not a favorite" }.to_string(),
    ));

    let body_rows = max_rows - 2;
    lines.truncate(body_rows);

    let border = Theme::fg(&theme.colors.border);
    let title = helpers::clip(&format!(" {} ", detail.title), inner_width);

    position_cursor(out, row, left);
    out.push_str(&border);
    out.push('┌');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&title);
    out.push_str(Theme::reset());
    out.push_str(&border);
    out.push_str(&"─".repeat(inner_width - helpers::width(&title)));
    out.push('┐');
    out.push_str(Theme::reset());

    for (i, line) in lines.iter().enumerate() {
        position_cursor(out, row + 1 + i, left);
        out.push_str(&border);
        out.push('│');

        let (text, color) = match line {
            Line::Title(text) => (format!(" {text}"), &theme.colors.header_fg),
            Line::Label(label, value) => (format!(" {label}: {value}"), &theme.colors.text_normal),
            Line::Text(text) => (format!(" {text}"), &theme.colors.text_normal),
            Line::Blank => (String::new(), &theme.colors.text_normal),
        };
        let text = helpers::clip(&text, inner_width);

        if matches!(line, Line::Title(_)) {
            out.push_str(Theme::bold());
        }
        out.push_str(&Theme::fg(color));
        out.push_str(&text);
        helpers::pad_to(out, helpers::width(&text), inner_width);
        out.push_str(Theme::reset());
        out.push_str(&border);
        out.push('│');
    }

    position_cursor(out, row + 1 + lines.len(), left);
    out.push_str(&border);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());
}
