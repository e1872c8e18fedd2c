//! Actions representing side effects to be executed by the app shell.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! shell executes them in order against the [`Host`](crate::shell::Host).
//! Actions are the boundary between pure state transitions and host calls.

use crate::fetch::FetchRequest;

/// Seconds between spinner frames while a lookup is in flight.
pub const SPINNER_INTERVAL_SECS: f64 = 0.1;

/// Commands representing side effects to be executed by the app shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends a character lookup to the host.
    ///
    /// Emitted for every non-empty query change; requests are never
    /// coalesced or cancelled.
    Fetch(FetchRequest),

    /// Asks the host for a timer event after the given number of seconds.
    ///
    /// Drives the loading spinner.
    ScheduleTick(f64),
}
