//! App shell wiring the search screen to the host.
//!
//! The shell owns the [`SelectionStore`], the [`SearchScreen`] and the
//! [`QueryCache`] for the lifetime of the plugin. It feeds events through
//! [`handle_event`] and runs the resulting actions against a [`Host`], which
//! main.rs implements with Zellij calls and tests implement with a recorder.

use crate::app::{handle_event, Action, Event, SearchScreen};
use crate::fetch::{FetchRequest, QueryCache};
use crate::store::SelectionStore;
use crate::ui::viewmodel::UIViewModel;
use crate::Config;

/// Side effects the shell needs from the plugin runtime.
pub trait Host {
    /// Starts an HTTP GET for `request`; the result must come back as
    /// [`Event::FetchCompleted`] carrying the request's token.
    fn web_get(&mut self, request: &FetchRequest);

    /// Requests a [`Event::Tick`] after `secs` seconds.
    fn set_timeout(&mut self, secs: f64);

    /// Hides the plugin pane.
    fn hide(&mut self);
}

/// Root of the plugin: store, search screen and cache.
#[derive(Debug)]
pub struct AppShell {
    pub store: SelectionStore,
    pub screen: SearchScreen,
    pub cache: QueryCache,
}

impl AppShell {
    /// Builds the shell from configuration, resolving the theme.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let screen = SearchScreen::new(crate::load_theme(config), config.api_url.clone())
            .with_placeholder(config.placeholder.clone());

        Self {
            store: SelectionStore::new(),
            screen,
            cache: QueryCache::new(config.cache_size),
        }
    }

    /// Handles one event and runs its actions. Returns whether to re-render.
    pub fn dispatch(&mut self, event: &Event, host: &mut dyn Host) -> bool {
        match handle_event(&mut self.screen, &mut self.store, &mut self.cache, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    execute_action(action, host);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    /// View model for the current state.
    #[must_use]
    pub fn viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        self.screen.compute_viewmodel(&self.store, rows, cols)
    }
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[tracing::instrument(level = "debug", skip(host))]
fn execute_action(action: &Action, host: &mut dyn Host) {
    match action {
        Action::CloseFocus => host.hide(),
        Action::Fetch(request) => {
            tracing::debug!(url = %request.url, token = %request.token, "sending lookup");
            host.web_get(request);
        }
        Action::ScheduleTick(secs) => host.set_timeout(*secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        requests: Vec<FetchRequest>,
        timeouts: usize,
        hidden: bool,
    }

    impl Host for Recorder {
        fn web_get(&mut self, request: &FetchRequest) {
            self.requests.push(request.clone());
        }

        fn set_timeout(&mut self, _secs: f64) {
            self.timeouts += 1;
        }

        fn hide(&mut self) {
            self.hidden = true;
        }
    }

    #[test]
    fn keystroke_reaches_host_as_request_and_timer() {
        let mut shell = AppShell::default();
        let mut host = Recorder::default();

        assert!(shell.dispatch(&Event::Char('r'), &mut host));

        assert_eq!(host.requests.len(), 1);
        assert!(host.requests[0].url.ends_with("?name=r"));
        assert_eq!(host.timeouts, 1);
    }

    #[test]
    fn escape_twice_hides_pane() {
        let mut shell = AppShell::default();
        let mut host = Recorder::default();

        shell.dispatch(&Event::Char('r'), &mut host);
        shell.dispatch(&Event::Escape, &mut host);
        assert!(!host.hidden);
        shell.dispatch(&Event::Escape, &mut host);
        assert!(host.hidden);
    }

    #[test]
    fn configured_endpoint_and_placeholder_are_used() {
        let config = Config {
            api_url: "http://localhost:9000/character".to_string(),
            placeholder: "Who?".to_string(),
            ..Config::default()
        };
        let mut shell = AppShell::new(&config);
        let mut host = Recorder::default();

        shell.dispatch(&Event::Char('m'), &mut host);

        assert_eq!(host.requests[0].url, "http://localhost:9000/character?name=m");
        assert_eq!(shell.screen.placeholder, "Who?");
    }
}
