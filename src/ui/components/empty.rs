//! Message panels shown instead of the list.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// ```text
/// [blank line]
/// [padding] MESSAGE  [padding]
/// [padding] subtitle [padding]
/// ```
///
/// The message uses `color`; the subtitle is dimmed.
pub fn render_message(out: &mut String, row: usize, state: &EmptyState, color: &str, theme: &Theme, cols: usize) {
    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(color));
    helpers::centered(out, &state.message, cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    helpers::centered(out, &state.subtitle, cols);
    out.push_str(Theme::reset());
}

/// Renders the loading indicator starting at `row`.
pub fn render_loading(out: &mut String, row: usize, theme: &Theme, cols: usize) {
    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    helpers::centered(out, "Loading countries...", cols);
    out.push_str(Theme::reset());
}
