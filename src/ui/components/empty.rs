//! Empty state component renderer.
//!
//! Shown in the list area when the dropdown is open but has no rows: before
//! the first search, and when a search matched nothing.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line message, one blank line below `row`.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = display_width(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    pad(out, msg_padding);
    out.push_str(&empty.message);
    pad(out, cols.saturating_sub(msg_padding + msg_len));
    out.push_str(Theme::reset());

    let sub_len = display_width(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(out, row + 2, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, sub_padding);
    out.push_str(&empty.subtitle);
    pad(out, cols.saturating_sub(sub_padding + sub_len));
    out.push_str(Theme::reset());

    row + 3
}
