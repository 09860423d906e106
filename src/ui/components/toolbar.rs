//! Toolbar component renderer.
//!
//! Shows the search term, the region filter and the sort order on one line
//! above the country list.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToolbarInfo;

/// Left margin of the toolbar line.
const TOOLBAR_MARGIN: usize = 1;

/// Renders the toolbar at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
///  Search: fra▏  │  Region: Europe  │  Sort: Population (High to Low)
/// ```
///
/// While typing, the search field uses the `search_bar_border` color and
/// shows a cursor; otherwise an empty term shows a dimmed placeholder.
pub fn render_toolbar(out: &mut String, row: usize, toolbar: &ToolbarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let search = if toolbar.typing {
        format!("{}▏", toolbar.search)
    } else if toolbar.search.is_empty() {
        "press / to search".to_string()
    } else {
        toolbar.search.clone()
    };

    let segments = [
        ("Search: ", search),
        ("  │  Region: ", toolbar.region.clone()),
        ("  │  Sort: ", toolbar.sort.clone()),
    ];

    out.push_str(&" ".repeat(TOOLBAR_MARGIN));
    let mut used = TOOLBAR_MARGIN;

    for (i, (label, value)) in segments.iter().enumerate() {
        let remaining = cols.saturating_sub(used);
        let label = helpers::clip(label, remaining);
        let value = helpers::clip(value, remaining.saturating_sub(helpers::width(&label)));

        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&label);

        let value_color = match i {
            0 if toolbar.typing => &theme.colors.search_bar_border,
            0 if toolbar.search.is_empty() => &theme.colors.text_dim,
            _ => &theme.colors.text_normal,
        };
        out.push_str(&Theme::fg(value_color));
        out.push_str(&value);

        used += helpers::width(&label) + helpers::width(&value);
    }

    helpers::pad_to(out, used, cols);
    out.push_str(Theme::reset());
    row + 1
}
