//! Shared rendering utilities.
//!
//! Components append ANSI-styled text to a frame buffer (`&mut String`) that
//! the renderer prints once per frame. Widths are measured in characters, not
//! bytes, so names like "Señor" pad correctly.

use crate::ui::theme::Theme;

/// Appends an ANSI cursor move to `row`/`col` (1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Visible width of `text` in characters.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.push_str(&" ".repeat(count));
}

/// Appends `text` with the given character ranges in match highlight colors.
///
/// Ranges are `(start, end)` character indices, end exclusive. On the cursor
/// row the highlight is skipped so the row background stays uniform.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_highlighted: bool,
) {
    if ranges.is_empty() || is_highlighted {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
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

/// Removes ANSI escape sequences, leaving the visible text.
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut plain = String::new();
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, c) if c.is_ascii_alphabetic() => in_escape = false,
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
    fn highlighting_preserves_visible_text() {
        let mut out = String::new();
        render_highlighted_text(&mut out, "Señor Meeseeks", &[(0, 2), (6, 8)], &Theme::default(), false);
        assert_eq!(strip_ansi(&out), "Señor Meeseeks");
        assert!(out.contains(&Theme::bg(&Theme::default().colors.match_highlight_bg)));
    }

    #[test]
    fn out_of_range_ranges_are_clamped() {
        let mut out = String::new();
        render_highlighted_text(&mut out, "Rick", &[(2, 40), (50, 60)], &Theme::default(), false);
        assert_eq!(strip_ansi(&out), "Rick");
    }

    #[test]
    fn cursor_row_is_not_highlighted() {
        let mut out = String::new();
        render_highlighted_text(&mut out, "Rick", &[(0, 2)], &Theme::default(), true);
        assert_eq!(out, "Rick");
    }

    #[test]
    fn width_counts_chars() {
        assert_eq!(display_width("Señor"), 5);
    }
}
