//! Composable UI component renderers.
//!
//! # Components
//!
//! - `header`: title bar with item count and display mode
//! - `toolbar`: search, region and sort controls
//! - `list`: country rows with column headers
//! - `empty`: loading, failure and empty-list messages
//! - `detail`: country detail overlay
//! - `footer`: key hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Toolbar]          all-countries view only
//! [Border]           all-countries view only
//! [List Headers]
//! [List Rows | Message]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```
//!
//! The detail overlay is drawn last, over the list area.

mod detail;
mod empty;
mod footer;
mod header;
mod list;
mod toolbar;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use detail::render_detail;
use empty::{render_loading, render_message};
use footer::render_footer;
use header::render_header;
use list::{render_list_headers, render_list_rows};
use toolbar::render_toolbar;

/// Renders a horizontal border line at `row` and returns the next free row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a full frame of `rows` by `cols` characters into `out`.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 1;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);

    if let Some(toolbar) = &vm.toolbar {
        current_row = render_toolbar(out, current_row, toolbar, theme, cols);
        current_row = render_border(out, current_row, &theme.colors.border, cols);
    }

    let body_start = current_row;
    match &vm.body {
        Body::Loading => render_loading(out, current_row, theme, cols),
        Body::Failed(state) => render_message(out, current_row, state, &theme.colors.error_fg, theme, cols),
        Body::Empty(state) => render_message(out, current_row, state, &theme.colors.empty_state_fg, theme, cols),
        Body::List { items, .. } => {
            current_row = render_list_headers(out, current_row, theme, cols);
            render_list_rows(out, current_row, items, theme, cols);
        }
    }

    let footer_row = rows.max(body_start + 2);
    let border_row = footer_row - 1;

    if let Some(detail) = &vm.detail {
        render_detail(out, body_start, border_row.saturating_sub(body_start), detail, theme, cols);
    }

    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
