//! Charpick: a Zellij plugin for picking characters from the Rick and Morty catalog.
//!
//! Charpick shows a search box whose text is sent to the public character
//! API on every keystroke. Matches appear in a dropdown of checkbox rows and
//! any number of them can be toggled into a selection that outlives the
//! query that found them.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point, Host impl
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  App Shell (shell)                                  │  ← Owns store + screen
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Search state machine                             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Fetch Layer   │   │ Store Layer   │
//! │ (ui/)         │   │ (fetch/)      │   │ (store/)      │
//! │ - Rendering   │   │ - URL/tokens  │   │ - Selection   │
//! │ - Theming     │   │ - Decoding    │   │ - Subscribers │
//! │ - Components  │   │ - Query cache │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/charpick.wasm" {
//!         api_url "https://rickandmortyapi.com/api/character/"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!         cache_size "32"
//!         placeholder "Search for characters"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use charpick::shell::{AppShell, Host};
//! use charpick::fetch::FetchRequest;
//! use charpick::{Config, Event};
//!
//! struct NoopHost;
//!
//! impl Host for NoopHost {
//!     fn web_get(&mut self, _request: &FetchRequest) {}
//!     fn set_timeout(&mut self, _secs: f64) {}
//!     fn hide(&mut self) {}
//! }
//!
//! let mut shell = AppShell::new(&Config::default());
//! assert!(shell.dispatch(&Event::Char('r'), &mut NoopHost));
//! assert!(shell.screen.status.is_loading());
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod shell;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, SearchScreen, SearchStatus};
pub use domain::{Character, CharpickError, Result};
pub use shell::{AppShell, Host};
pub use store::SelectionStore;
pub use ui::Theme;

use crate::app::DEFAULT_PLACEHOLDER;
use crate::fetch::{DEFAULT_API_URL, DEFAULT_CACHE_SIZE};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Character endpoint queried with `?name=`. Default: the public API.
    pub api_url: String,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file (`~` maps to `/host`). Takes
    /// precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Log filter level (`trace`, `debug`, `info`, `warn`, `error`) or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Number of queries kept in the result cache. Default: 32
    pub cache_size: usize,

    /// Search bar text shown while the query is empty.
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            cache_size: DEFAULT_CACHE_SIZE,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing, blank or unparsable values fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use charpick::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("cache_size".to_string(), "8".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.cache_size, 8);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let cache_size = config
            .get("cache_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.cache_size);

        Self {
            api_url: non_blank("api_url").unwrap_or(defaults.api_url),
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            trace_level: non_blank("trace_level"),
            cache_size,
            placeholder: config
                .get("placeholder")
                .cloned()
                .unwrap_or(defaults.placeholder),
        }
    }
}

/// Resolves the configured theme: file first, then built-in name, then default.
///
/// Load failures are logged and fall back to the default theme.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}
