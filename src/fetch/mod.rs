//! Remote character lookup.
//!
//! The plugin never performs I/O itself: it builds a [`FetchRequest`], the
//! host runs it via `web_request`, and the result returns as an event. This
//! module owns both halves of that exchange plus the query cache.
//!
//! - [`request`]: URL building, request tokens, context map
//! - [`response`]: status/body interpretation and completion decoding
//! - [`cache`]: plugin-lifetime query → results cache

pub mod cache;
pub mod request;
pub mod response;

pub use cache::{QueryCache, DEFAULT_CACHE_SIZE};
pub use request::{character_search_url, fetch_characters, FetchRequest, RequestToken, DEFAULT_API_URL};
pub use response::{completion_event, parse_characters, FetchCompletion};
