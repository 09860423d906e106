//! Country list component renderer.
//!
//! Each row shows a favorite marker, the common name, the region and the
//! formatted population. The selected row is drawn with the selection colors
//! across the full width.

use crate::app::state::NAME_COLUMN_WIDTH;
use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const MARKER_WIDTH: usize = 2;
const REGION_COLUMN_WIDTH: usize = 12;
const POPULATION_COLUMN_WIDTH: usize = 15;

/// Renders the column headers at `row` and returns the next free row.
pub fn render_list_headers(out: &mut String, row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));

    let line = format!(
        "{:MARKER_WIDTH$}{:<NAME_COLUMN_WIDTH$}{:<REGION_COLUMN_WIDTH$}{:>POPULATION_COLUMN_WIDTH$}",
        "", "NAME", "REGION", "POPULATION"
    );
    let line = helpers::clip(&line, cols);
    out.push_str(&line);
    helpers::pad_to(out, helpers::width(&line), cols);

    out.push_str(Theme::reset());
    row + 1
}

/// Renders all items starting at `row` and returns the next free row.
pub fn render_list_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(out, current_row, item, theme, cols);
    }
    current_row
}

/// Renders one country row, never wider than `cols`.
///
/// # Styling Precedence
///
/// 1. Selection colors (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
fn render_list_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let base = |out: &mut String| {
        if item.is_selected {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
        }
    };

    base(out);
    if cols < MARKER_WIDTH {
        helpers::pad_to(out, 0, cols);
        out.push_str(Theme::reset());
        return row + 1;
    }

    if item.is_favorite {
        if !item.is_selected {
            out.push_str(&Theme::fg(&theme.colors.favorite_fg));
        }
        out.push_str("★ ");
        base(out);
    } else {
        out.push_str("  ");
    }

    let name_width = NAME_COLUMN_WIDTH.min(cols - MARKER_WIDTH);
    let name = helpers::clip(&item.name, name_width);
    helpers::highlighted_text(out, &name, &item.highlight_ranges, theme, item.is_selected);
    base(out);
    helpers::pad_to(out, helpers::width(&name), name_width);

    let rest = format!(
        "{:<REGION_COLUMN_WIDTH$}{:>POPULATION_COLUMN_WIDTH$}",
        helpers::clip(&item.region, REGION_COLUMN_WIDTH - 1),
        item.population
    );
    let used = MARKER_WIDTH + name_width;
    let rest = helpers::clip(&rest, cols - used);
    out.push_str(&rest);
    helpers::pad_to(out, used + helpers::width(&rest), cols);

    out.push_str(Theme::reset());
    row + 1
}
