//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from the shell state,
//! then let the components append the frame to a buffer that is printed in
//! one go.

use crate::shell::AppShell;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(shell: &AppShell, rows: usize, cols: usize) {
    let viewmodel = shell.viewmodel(rows, cols);
    print!("{}", render_to_string(&viewmodel, &shell.screen.theme, rows, cols));
}

/// Renders a view model into an ANSI frame without printing it.
#[must_use]
pub fn render_to_string(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    components::render_layout(&mut out, vm, theme, cols, rows);
    out
}
