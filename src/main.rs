//! Zellij plugin wrapper and entry point.
//!
//! The thin layer between the charpick library and the Zellij runtime:
//! it translates Zellij events into [`Event`]s for the [`AppShell`] and
//! implements [`Host`] with Zellij calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the shell
//! 2. **Permissions**: Request `WebAccess`
//! 3. **Subscribe**: `Key`, `WebRequestResult`, `Timer`, `PermissionRequestResult`
//! 4. **Update**: Map the event, dispatch it, re-render on demand
//! 5. **Render**: Draw the current view model
//!
//! # Keybindings
//!
//! - Printable keys: Type into the search box (opens the list)
//! - `Backspace`: Delete last character
//! - `Ctrl+u`: Clear the query
//! - `Down` / `Ctrl+n`: Move down
//! - `Up` / `Ctrl+p`: Move up
//! - `Tab` / `Enter`: Toggle the highlighted character
//! - `Ctrl+o`: Open or close the list
//! - `Esc`: Close the list, or hide the plugin if it is closed

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use charpick::fetch::{self, FetchRequest};
use charpick::{AppShell, Config, Event, Host};

register_plugin!(State);

/// Plugin state wrapper around the library shell.
#[derive(Default)]
struct State {
    shell: AppShell,
}

/// [`Host`] backed by the Zellij plugin API.
struct ZellijHost;

impl Host for ZellijHost {
    fn web_get(&mut self, request: &FetchRequest) {
        let headers = BTreeMap::from([("Accept".to_string(), "application/json".to_string())]);
        web_request(&request.url, HttpVerb::Get, headers, vec![], request.context());
    }

    fn set_timeout(&mut self, secs: f64) {
        set_timeout(secs);
    }

    fn hide(&mut self) {
        hide_self();
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        charpick::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(api_url = %config.api_url, cache_size = config.cache_size, "parsed configuration");
        self.shell = AppShell::new(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::info!("charpick loaded");
    }

    /// Translates and dispatches one Zellij event; returns whether to re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status, body_len = body.len(), "web request result");
                match fetch::completion_event(status, &body, &context) {
                    Some(completion) => Event::FetchCompleted(completion),
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        self.shell.dispatch(&our_event, &mut ZellijHost)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        charpick::ui::render(&self.shell, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('o') => Some(Event::ToggleDropdown),
                BareKey::Char('u') => Some(Event::ClearQuery),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Tab | BareKey::Enter => Event::ToggleHighlighted,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }
}
