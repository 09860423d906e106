//! Shared rendering utilities.
//!
//! Components append ANSI-styled text to a `String` buffer instead of printing
//! directly, so a full frame can be inspected in tests and printed once.
//! All widths are measured in characters, not bytes.

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Appends spaces so a line that already holds `used` characters fills `cols`.
pub fn pad_to(out: &mut String, used: usize, cols: usize) {
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
}

/// Appends `text` centered in a line of `cols` characters.
pub fn centered(out: &mut String, text: &str, cols: usize) {
    let text = clip(text, cols);
    let len = width(&text);
    let padding = cols.saturating_sub(len) / 2;

    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    pad_to(out, padding + len, cols);
}

/// Appends `text` with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices, end exclusive. When
/// `is_selected` is `true` match highlighting is skipped so it does not fight
/// the selection background.
pub fn highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Removes the color and cursor escapes emitted by the renderers.
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut plain = String::new();
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm' | 'H') => in_escape = false,
            (true, _) => {}
            (false, c) => plain.push(c),
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fills_line() {
        let mut out = String::new();
        centered(&mut out, "abc", 9);
        assert_eq!(out, "   abc   ");

        let mut out = String::new();
        centered(&mut out, "too long", 3);
        assert_eq!(out, "too");
    }

    #[test]
    fn highlighted_text_keeps_all_characters() {
        let theme = Theme::default();
        let mut out = String::new();
        highlighted_text(&mut out, "Bahamas", &[(1, 2), (3, 4)], &theme, false);

        let plain: String = strip_ansi(&out);
        assert_eq!(plain, "Bahamas");
        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn selected_text_is_not_highlighted() {
        let theme = Theme::default();
        let mut out = String::new();
        highlighted_text(&mut out, "Peru", &[(0, 2)], &theme, true);
        assert_eq!(out, "Peru");
    }

    #[test]
    fn out_of_range_highlights_are_ignored() {
        let theme = Theme::default();
        let mut out = String::new();
        highlighted_text(&mut out, "Peru", &[(2, 9), (7, 9)], &theme, false);
        assert_eq!(strip_ansi(&out), "Peru");
    }
}
