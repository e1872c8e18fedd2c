//! Loading / error line under the search bar.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusKind, StatusLine};

/// Renders the status line if present; the row is reserved either way.
pub fn render_status_line(out: &mut String, row: usize, status: Option<&StatusLine>, theme: &Theme) -> usize {
    let Some(status) = status else {
        return row + 1;
    };

    position_cursor(out, row, 1);
    match status.kind {
        StatusKind::Loading => {
            out.push_str(Theme::dim());
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        StatusKind::Error => {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.error_fg));
        }
    }
    out.push_str("  ");
    out.push_str(&status.text);
    out.push_str(Theme::reset());
    row + 1
}
