//! Badge strip listing the current selection.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::Badge;

/// Renders `● name` for each badge on one line, dots in cycling colors.
///
/// Always consumes one row so the layout below stays put.
pub fn render_badges(out: &mut String, row: usize, badges: &[Badge], theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push(' ');

    for badge in badges {
        out.push_str(&Theme::fg(theme.colors.badge_color(badge.color_slot)));
        out.push('●');
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push(' ');
        out.push_str(&badge.label);
        out.push_str("  ");
    }

    out.push_str(Theme::reset());
    row + 1
}
