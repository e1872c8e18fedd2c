//! Composable UI component renderers.
//!
//! - [`header`]: Title with result and selection counts
//! - [`search`]: Search input box with spinner and dropdown arrow
//! - [`badges`]: Selected characters as colored badges
//! - [`status`]: Loading or error line
//! - [`list`]: Checkbox rows of the dropdown
//! - [`empty`]: Message for an open dropdown without rows
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Badges]
//! [Status line]
//! [Rows | Empty state]
//! [Border]
//! [Footer]
//! ```

mod badges;
mod empty;
mod footer;
mod header;
mod list;
mod search;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use badges::render_badges;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_rows;
use search::render_search_bar;
use status::render_status_line;

/// Renders a horizontal border line at `row`. Returns `row + 1`.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the full screen layout into `out`.
///
/// The footer sits on the last row with a border above it; everything else
/// flows from the top.
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, &vm.search_bar, theme, cols);
    current_row = render_badges(out, current_row, &vm.badges, theme);
    current_row = render_status_line(out, current_row, vm.status_line.as_ref(), theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row, empty, theme, cols);
    } else {
        render_rows(out, current_row, &vm.rows, theme, cols);
    }

    let footer_row = rows.max(1);
    render_border(out, footer_row.saturating_sub(1).max(1), &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
