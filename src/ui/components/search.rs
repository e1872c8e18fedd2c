//! Search bar component renderer.
//!
//! A 3-line bordered input box:
//!
//! ```text
//!      ┌──────────────────────────────────────┐
//!      │ ⠋ rick                             ▴ │
//!      └──────────────────────────────────────┘
//! ```
//!
//! The leading glyph is the spinner while loading, a magnifier otherwise.
//! The trailing arrow shows whether the dropdown is open.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search box starting at `row`. Returns `row + 3`.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let arrow = if search.is_open { '▴' } else { '▾' };
    // " g " + text + " a "
    let text_width = inner_width.saturating_sub(6);

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('│');
    out.push(' ');

    if let Some(frame) = search.spinner {
        out.push_str(&Theme::fg(&theme.colors.spinner_fg));
        out.push(frame);
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push('⌕');
    }
    out.push(' ');

    let (text, style) = match &search.placeholder {
        Some(placeholder) => (placeholder.as_str(), Theme::fg(&theme.colors.text_dim)),
        None => (search.query.as_str(), Theme::fg(&theme.colors.text_normal)),
    };
    // Keep the tail of long queries visible, where the user is typing.
    let skip = display_width(text).saturating_sub(text_width);
    let visible: String = text.chars().skip(skip).collect();

    out.push_str(&style);
    out.push_str(&visible);
    pad(out, text_width.saturating_sub(display_width(&visible)));

    out.push(' ');
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push(arrow);
    out.push(' ');
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
