//! Shared UI state that outlives any single search.
//!
//! - [`selection`]: the selection store and its subscription handles

pub mod selection;

pub use selection::{SelectionStore, SubscriptionId};
