//! Option list renderer.
//!
//! Each row is a checkbox, the character's name, its thumbnail file name and
//! its episode count:
//!
//! ```text
//!  [x] Rick Sanchez                       1.jpeg      Episodes: 51
//!  [ ] Rick D. Sanchez III                19.jpeg     Episodes: 1
//! ```

use crate::ui::helpers::{self, display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::RowView;

/// Width of the name column, including its trailing gap.
const NAME_COLUMN: usize = 34;
/// Width of the thumbnail column, including its trailing gap.
const THUMB_COLUMN: usize = 12;

/// Renders all rows starting at `row`. Returns the next free row.
pub fn render_rows(out: &mut String, row: usize, rows: &[RowView], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_row(out, current_row, item, theme, cols);
    }
    current_row
}

fn render_row(out: &mut String, row: usize, item: &RowView, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let base = if item.is_highlighted {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    out.push_str(&base);
    out.push(' ');

    if item.checked {
        if !item.is_highlighted {
            out.push_str(&Theme::fg(&theme.colors.checkbox_fg));
        }
        out.push_str("[x]");
        out.push_str(&base);
    } else {
        out.push_str("[ ]");
    }
    out.push(' ');

    helpers::render_highlighted_text(out, &item.name, &item.highlight_ranges, theme, item.is_highlighted);
    pad(out, NAME_COLUMN.saturating_sub(display_width(&item.name)));

    if !item.is_highlighted {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&item.thumbnail);
    pad(out, THUMB_COLUMN.saturating_sub(display_width(&item.thumbnail)));

    let episodes = format!("Episodes: {}", item.episodes);
    out.push_str(&episodes);

    // " [x] " is five columns
    let line_len = 5 + NAME_COLUMN.max(display_width(&item.name))
        + THUMB_COLUMN.max(display_width(&item.thumbnail))
        + display_width(&episodes);
    pad(out, cols.saturating_sub(line_len));

    out.push_str(Theme::reset());
    row + 1
}
