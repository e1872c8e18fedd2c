//! Domain layer for the charpick plugin.
//!
//! Core types independent of Zellij APIs: the catalog [`Character`], the
//! dropdown's [`SelectableOption`], and the error types.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`character`]: Catalog records and the response envelope
//! - [`option`]: Dropdown projection of a character

pub mod character;
pub mod error;
pub mod option;

pub use character::{Character, CharacterPage, PageInfo};
pub use error::{CharpickError, FetchFailure, Result, FETCH_ERROR_MESSAGE};
pub use option::SelectableOption;
