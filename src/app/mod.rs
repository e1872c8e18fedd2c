//! Application layer coordinating the search screen, events and actions.
//!
//! Sits between the plugin runtime (main.rs, via [`crate::shell`]) and the
//! domain, fetch and store layers.
//!
//! ```text
//! Key / Timer / WebRequestResult → Event → handle_event → SearchScreen + SelectionStore
//!                                                ↓
//!                                             Actions → Host
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Search status and dropdown state types
//! - [`state`]: Search screen state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::{Action, SPINNER_INTERVAL_SECS};
pub use handler::{handle_event, Event};
pub use modes::{Dropdown, SearchStatus};
pub use state::{SearchScreen, DEFAULT_PLACEHOLDER};
