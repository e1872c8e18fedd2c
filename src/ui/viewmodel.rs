//! View model types representing renderable UI state.
//!
//! View models are computed by [`SearchScreen::compute_viewmodel`] and consumed
//! by the renderer. They hold display-ready data only: truncated names,
//! highlight ranges, the current spinner frame.
//!
//! [`SearchScreen::compute_viewmodel`]: crate::app::SearchScreen::compute_viewmodel

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    /// One badge per selected character that fits on the badge line.
    pub badges: Vec<Badge>,

    /// Visible option rows; empty while the dropdown is closed.
    pub rows: Vec<RowView>,

    /// Loading or error line under the search bar.
    pub status_line: Option<StatusLine>,

    /// Message shown in place of rows when the open dropdown has none.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// One checkbox row of the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Whether the character is in the selection.
    pub checked: bool,

    /// Image file name standing in for the avatar (e.g. `1.jpeg`).
    pub thumbnail: String,

    /// Display name, truncated to fit.
    pub name: String,

    /// Number of episodes the character appears in.
    pub episodes: usize,

    /// Whether the cursor is on this row.
    pub is_highlighted: bool,

    /// Character ranges of `name` matching the query, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// A selected character shown in the badge strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,

    /// Position in the selection; picks the badge dot color.
    pub color_slot: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search input box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,

    /// Shown instead of the query while it is empty.
    pub placeholder: Option<String>,

    /// Current spinner frame while a lookup is in flight.
    pub spinner: Option<char>,

    /// Whether the dropdown is open (selects the arrow glyph).
    pub is_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}
