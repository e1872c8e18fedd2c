//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place the search screen changes in response
//! to input. It mutates the [`SearchScreen`], writes the [`SelectionStore`]
//! when a row is toggled and returns the side effects the shell must run.
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `ClearQuery`
//! - **Navigation**: `KeyDown`, `KeyUp`, `ToggleHighlighted`
//! - **Dropdown**: `ToggleDropdown`, `Escape`, `CloseFocus`
//! - **System**: `Tick`, `FetchCompleted`, `PermissionsResult`
//!
//! # Example
//!
//! ```
//! use charpick::app::{handle_event, Action, Event, SearchScreen};
//! use charpick::fetch::{QueryCache, DEFAULT_API_URL};
//! use charpick::store::SelectionStore;
//! use charpick::ui::Theme;
//!
//! let mut screen = SearchScreen::new(Theme::default(), DEFAULT_API_URL);
//! let mut store = SelectionStore::new();
//! let mut cache = QueryCache::default();
//!
//! let (render, actions) = handle_event(&mut screen, &mut store, &mut cache, &Event::Char('r'))?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! # Ok::<(), charpick::domain::CharpickError>(())
//! ```

use super::actions::SPINNER_INTERVAL_SECS;
use super::modes::Dropdown;
use crate::app::{Action, SearchScreen};
use crate::domain::error::Result;
use crate::domain::FetchFailure;
use crate::fetch::{FetchCompletion, QueryCache};
use crate::store::SelectionStore;

/// Events triggered by user input, timers or host responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Empties the query.
    ClearQuery,

    /// Moves the cursor down (wraps to top).
    KeyDown,
    /// Moves the cursor up (wraps to bottom).
    KeyUp,
    /// Toggles the highlighted row's character in the selection.
    ToggleHighlighted,

    /// Opens or closes the option list.
    ToggleDropdown,
    /// Closes the option list, or hides the pane if it is already closed.
    Escape,
    /// Hides the pane.
    CloseFocus,

    /// Spinner timer elapsed.
    Tick,

    /// A lookup finished.
    FetchCompleted(FetchCompletion),

    /// The host answered the web access permission request.
    PermissionsResult {
        granted: bool,
    },
}

/// Processes an event and returns whether to re-render plus the actions to run.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that touch
/// fallible state.
///
/// # Tracing
///
/// Each call runs inside a debug-level `handle_event` span.
pub fn handle_event(
    screen: &mut SearchScreen,
    store: &mut SelectionStore,
    cache: &mut QueryCache,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            let mut query = screen.query.clone();
            query.push(*c);
            screen.dropdown = Dropdown::Open;
            tracing::trace!(query = %query, char = %c, "search query updated");
            Ok(change_query(screen, cache, query))
        }
        Event::Backspace => {
            if screen.query.is_empty() {
                return Ok((false, vec![]));
            }
            let mut query = screen.query.clone();
            query.pop();
            Ok(change_query(screen, cache, query))
        }
        Event::ClearQuery => {
            if screen.query.is_empty() {
                return Ok((false, vec![]));
            }
            Ok(change_query(screen, cache, String::new()))
        }
        Event::KeyDown => {
            if !screen.dropdown.is_open() {
                return Ok((false, vec![]));
            }
            screen.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if !screen.dropdown.is_open() {
                return Ok((false, vec![]));
            }
            screen.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::ToggleHighlighted => {
            if !screen.dropdown.is_open() {
                return Ok((false, vec![]));
            }
            let Some(option) = screen.highlighted_option() else {
                tracing::debug!("no option highlighted");
                return Ok((false, vec![]));
            };
            let currently_selected = store.contains(option.value);
            let changed = SearchScreen::toggle_selection(option, currently_selected, store);
            Ok((changed, vec![]))
        }
        Event::ToggleDropdown => {
            screen.dropdown = screen.dropdown.toggled();
            tracing::debug!(open = screen.dropdown.is_open(), "dropdown toggled");
            Ok((true, vec![]))
        }
        Event::Escape => {
            if screen.dropdown.is_open() {
                screen.dropdown = Dropdown::Closed;
                return Ok((true, vec![]));
            }
            Ok((false, vec![Action::CloseFocus]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Tick => {
            if screen.advance_spinner() {
                Ok((true, vec![Action::ScheduleTick(SPINNER_INTERVAL_SECS)]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::FetchCompleted(completion) => {
            let applied = screen.apply_completion(completion, cache);
            Ok((applied, vec![]))
        }
        Event::PermissionsResult { granted } => {
            screen.web_access_denied = !granted;
            if *granted {
                tracing::info!("web access granted");
                return Ok((false, vec![]));
            }

            tracing::warn!("web access denied; lookups will fail");
            if screen.status.is_loading() {
                screen.fail(&FetchFailure::Transport("web access not granted".to_string()));
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
    }
}

/// Applies a new query and collects the lookup and spinner actions it needs.
fn change_query(screen: &mut SearchScreen, cache: &mut QueryCache, query: String) -> (bool, Vec<Action>) {
    let mut actions = vec![];

    if let Some(request) = screen.on_query_change(query, cache) {
        actions.push(Action::Fetch(request));
        if screen.arm_spinner() {
            actions.push(Action::ScheduleTick(SPINNER_INTERVAL_SECS));
        }
    }

    (true, actions)
}
