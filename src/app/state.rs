//! Search screen state and view model computation.
//!
//! [`SearchScreen`] owns everything transient about one search: the query,
//! the lookup status, the option list and the cursor. The selection itself
//! lives in the [`SelectionStore`], which the screen reads and writes but does
//! not own, so selection survives every new query.
//!
//! # Example
//!
//! ```
//! use charpick::app::{SearchScreen, SearchStatus};
//! use charpick::fetch::{QueryCache, DEFAULT_API_URL};
//! use charpick::ui::Theme;
//!
//! let mut screen = SearchScreen::new(Theme::default(), DEFAULT_API_URL);
//! let mut cache = QueryCache::default();
//!
//! let request = screen.on_query_change("rick".to_string(), &mut cache);
//! assert!(request.is_some());
//! assert!(screen.status.is_loading());
//! ```

use super::modes::{Dropdown, SearchStatus};
use crate::domain::{FetchFailure, SelectableOption};
use crate::fetch::{self, FetchCompletion, FetchRequest, QueryCache, RequestToken};
use crate::store::SelectionStore;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Badge, EmptyState, FooterInfo, HeaderInfo, RowView, SearchBarInfo, StatusKind, StatusLine,
    UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Placeholder shown in the search bar while the query is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Search for characters";

/// Spinner frames cycled while a lookup is in flight.
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Rows taken by everything except the option list: blank line, header,
/// border, search bar (3), badge strip, status line, border, footer.
const CHROME_ROWS: usize = 10;

/// Widest name shown before truncation.
const NAME_WIDTH: usize = 32;

/// State of the character search screen.
///
/// Mutated by [`handle_event`](super::handle_event); rendered through
/// [`compute_viewmodel`](Self::compute_viewmodel).
#[derive(Debug, Clone)]
pub struct SearchScreen {
    /// Current search text, updated on every keystroke.
    pub query: String,

    /// Lookup status.
    pub status: SearchStatus,

    /// Options from the latest successful lookup (or the cache).
    pub options: Vec<SelectableOption>,

    /// Index of the highlighted option.
    pub cursor: usize,

    /// Whether the option list is expanded.
    pub dropdown: Dropdown,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Catalog endpoint lookups are sent to.
    pub api_url: String,

    /// Search bar text shown while the query is empty.
    pub placeholder: String,

    /// Set once the host refuses web access.
    pub web_access_denied: bool,

    last_token: RequestToken,
    spinner_frame: usize,
    tick_scheduled: bool,
}

impl SearchScreen {
    /// Creates an idle screen with the dropdown closed.
    #[must_use]
    pub fn new(theme: Theme, api_url: impl Into<String>) -> Self {
        Self {
            query: String::new(),
            status: SearchStatus::Idle,
            options: Vec::new(),
            cursor: 0,
            dropdown: Dropdown::Closed,
            theme,
            api_url: api_url.into(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            web_access_denied: false,
            last_token: RequestToken::ZERO,
            spinner_frame: 0,
            tick_scheduled: false,
        }
    }

    /// Replaces the search bar placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Updates the query and starts a lookup for it.
    ///
    /// An empty query returns the screen to `Idle`, clears the options and
    /// orphans any in-flight request. Any other text (including whitespace)
    /// issues a new request, even if it equals the previous query. A cached
    /// result for the same text pre-populates the options meanwhile; without
    /// one, only previous options still matching the text stay listed.
    pub fn on_query_change(&mut self, text: String, cache: &mut QueryCache) -> Option<FetchRequest> {
        self.query = text;

        if self.query.is_empty() {
            tracing::debug!("query cleared");
            self.status = SearchStatus::Idle;
            self.options.clear();
            self.cursor = 0;
            return None;
        }

        if self.web_access_denied {
            self.fail(&FetchFailure::Transport("web access not granted".to_string()));
            return None;
        }

        self.last_token = self.last_token.next();
        let request = fetch::fetch_characters(&self.api_url, self.last_token, &self.query);
        self.status = SearchStatus::Loading {
            token: request.token,
        };

        if let Some(cached) = cache.get(&self.query) {
            tracing::debug!(query = %self.query, cached = cached.len(), "pre-populating from cache");
            self.options = SelectableOption::from_results(cached);
        } else {
            self.retain_matching_options();
        }
        self.clamp_cursor();

        tracing::trace!(query = %self.query, token = %request.token, "lookup issued");
        Some(request)
    }

    /// Applies a lookup completion if it belongs to the in-flight request.
    ///
    /// Returns `false` (and changes nothing) for completions of superseded or
    /// orphaned requests.
    pub fn apply_completion(&mut self, completion: &FetchCompletion, cache: &mut QueryCache) -> bool {
        if self.status.pending_token() != Some(completion.token) {
            tracing::debug!(
                token = %completion.token,
                latest = %self.last_token,
                "discarding stale lookup result"
            );
            return false;
        }

        match &completion.outcome {
            Ok(page) => {
                cache.insert(&completion.query, page.results.clone());
                self.options = SelectableOption::from_results(&page.results);
                self.status = SearchStatus::Ready { total: page.total() };
                self.clamp_cursor();
                tracing::debug!(
                    query = %completion.query,
                    results = self.options.len(),
                    total = page.total(),
                    "lookup succeeded"
                );
            }
            Err(failure) => self.fail(failure),
        }
        true
    }

    /// Moves to `Failed`, clearing the options.
    pub fn fail(&mut self, failure: &FetchFailure) {
        tracing::warn!(query = %self.query, error = %failure, "lookup failed");
        self.options.clear();
        self.cursor = 0;
        self.status = SearchStatus::Failed {
            message: failure.user_message().to_string(),
        };
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.options.len();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.options.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// The option under the cursor, if any.
    #[must_use]
    pub fn highlighted_option(&self) -> Option<&SelectableOption> {
        self.options.get(self.cursor)
    }

    /// Writes the selection resulting from toggling `option`.
    ///
    /// When `currently_selected`, every character with the option's id is
    /// removed; otherwise the option's character is appended. The whole new
    /// list is handed to [`SelectionStore::set_selection`]. Options without a
    /// character are ignored and `false` is returned.
    pub fn toggle_selection(
        option: &SelectableOption,
        currently_selected: bool,
        store: &mut SelectionStore,
    ) -> bool {
        let Some(character) = option.character.as_ref() else {
            tracing::debug!(value = option.value, "ignoring option without character");
            return false;
        };

        let next = if currently_selected {
            store
                .selection()
                .iter()
                .filter(|c| c.id != option.value)
                .cloned()
                .collect()
        } else {
            let mut next = store.selection().to_vec();
            next.push(character.clone());
            next
        };

        tracing::debug!(
            character_id = option.value,
            selected = !currently_selected,
            "selection toggled"
        );
        store.set_selection(next);
        true
    }

    /// Builds the checkbox row for one option.
    ///
    /// Returns `None` for options lacking a character. Checked state is read
    /// from the store; cursor highlighting is applied by the caller.
    #[must_use]
    pub fn render_row(&self, option: &SelectableOption, store: &SelectionStore) -> Option<RowView> {
        let character = option.character.as_ref()?;

        Some(RowView {
            checked: store.contains(option.value),
            thumbnail: character.thumbnail().to_string(),
            name: truncate(&option.label, NAME_WIDTH),
            episodes: character.episode_count(),
            is_highlighted: false,
            highlight_ranges: vec![],
        })
    }

    /// Arms the spinner timer. Returns `true` if a new tick must be scheduled.
    pub fn arm_spinner(&mut self) -> bool {
        if self.tick_scheduled {
            return false;
        }
        self.tick_scheduled = true;
        true
    }

    /// Advances the spinner on a timer tick.
    ///
    /// Returns `true` while loading, meaning the frame changed and another
    /// tick should be scheduled.
    pub fn advance_spinner(&mut self) -> bool {
        self.tick_scheduled = false;
        if !self.status.is_loading() {
            return false;
        }
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        self.tick_scheduled = true;
        true
    }

    /// Computes a renderable view model for the given terminal size.
    ///
    /// # Windowing
    ///
    /// The visible slice of options is centered on the cursor and shifted to
    /// stay full near the end of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, store: &SelectionStore, rows: usize, cols: usize) -> UIViewModel {
        let rows_view = if self.dropdown.is_open() {
            self.compute_rows(store, rows)
        } else {
            vec![]
        };

        UIViewModel {
            header: self.compute_header(store),
            search_bar: self.compute_search_bar(),
            badges: Self::compute_badges(store, cols),
            empty_state: self.compute_empty_state(&rows_view),
            rows: rows_view,
            status_line: self.compute_status_line(),
            footer: self.compute_footer(),
        }
    }

    fn compute_rows(&self, store: &SelectionStore, rows: usize) -> Vec<RowView> {
        if self.options.is_empty() {
            return vec![];
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.options.len());
        if visible_end - visible_start < available_rows && self.options.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = SkimMatcherV2::default();

        self.options[visible_start..visible_end]
            .iter()
            .enumerate()
            .filter_map(|(relative_idx, option)| {
                let mut row = self.render_row(option, store)?;
                row.is_highlighted = visible_start + relative_idx == self.cursor;
                row.highlight_ranges = self.compute_highlight_ranges(&row.name, &matcher);
                Some(row)
            })
            .collect()
    }

    /// Coalesces fuzzy match indices of the query into `(start, end)` ranges.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let query = self.query.trim();
        if query.is_empty() {
            return vec![];
        }

        let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_header(&self, store: &SelectionStore) -> HeaderInfo {
        let selected = store.selection().len();
        let title = match &self.status {
            SearchStatus::Ready { total } => {
                format!(" Characters ({} of {total}) · {selected} selected ", self.options.len())
            }
            _ => format!(" Characters · {selected} selected "),
        };
        HeaderInfo { title }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let spinner = self
            .status
            .is_loading()
            .then(|| SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]);

        SearchBarInfo {
            query: self.query.clone(),
            placeholder: self.query.is_empty().then(|| self.placeholder.clone()),
            spinner,
            is_open: self.dropdown.is_open(),
        }
    }

    /// One badge per selected character, as many as fit on a single line.
    fn compute_badges(store: &SelectionStore, cols: usize) -> Vec<Badge> {
        let mut used = 0;
        store
            .selection()
            .iter()
            .enumerate()
            .map_while(|(slot, character)| {
                let label = truncate(&character.name, NAME_WIDTH);
                // "● " + label + two spaces of separation
                used += label.chars().count() + 4;
                (used <= cols).then_some(Badge { label, color_slot: slot })
            })
            .collect()
    }

    fn compute_status_line(&self) -> Option<StatusLine> {
        match &self.status {
            SearchStatus::Loading { .. } => Some(StatusLine {
                kind: StatusKind::Loading,
                text: "Loading…".to_string(),
            }),
            SearchStatus::Failed { message } => Some(StatusLine {
                kind: StatusKind::Error,
                text: message.clone(),
            }),
            SearchStatus::Idle | SearchStatus::Ready { .. } => None,
        }
    }

    fn compute_empty_state(&self, rows: &[RowView]) -> Option<EmptyState> {
        if !self.dropdown.is_open() || !rows.is_empty() {
            return None;
        }

        match self.status {
            SearchStatus::Idle => Some(EmptyState {
                message: "Type a name to search the catalog".to_string(),
                subtitle: "Selected characters stay selected across searches".to_string(),
            }),
            SearchStatus::Ready { .. } => Some(EmptyState {
                message: "No characters found".to_string(),
                subtitle: format!("Nothing matches \"{}\"", self.query),
            }),
            SearchStatus::Loading { .. } | SearchStatus::Failed { .. } => None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.dropdown.is_open() {
            "↑/↓ or Ctrl+n/p: navigate  Tab/Enter: toggle  Ctrl+u: clear  Esc: close list"
        } else {
            "Type to search  Ctrl+o: open list  Esc: hide"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Drops carried-over options whose label no longer matches the query.
    fn retain_matching_options(&mut self) {
        use fuzzy_matcher::FuzzyMatcher;

        let query = self.query.trim();
        if query.is_empty() {
            return;
        }

        let matcher = SkimMatcherV2::default();
        let before = self.options.len();
        self.options
            .retain(|option| matcher.fuzzy_match(&option.label, query).is_some());
        if self.options.len() < before {
            tracing::trace!(query, dropped = before - self.options.len(), "pruned stale options");
        }
    }

    fn clamp_cursor(&mut self) {
        if self.options.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.options.len() - 1);
        }
    }
}

/// Truncates to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Character, CharacterPage, PageInfo};
    use crate::fetch::DEFAULT_API_URL;

    fn character(id: u32, name: &str, episodes: usize) -> Character {
        Character {
            id,
            name: name.to_string(),
            image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
            episode: (1..=episodes)
                .map(|e| format!("https://rickandmortyapi.com/api/episode/{e}"))
                .collect(),
        }
    }

    fn screen() -> SearchScreen {
        SearchScreen::new(Theme::default(), DEFAULT_API_URL)
    }

    fn completion(request: &FetchRequest, results: Vec<Character>) -> FetchCompletion {
        FetchCompletion {
            token: request.token,
            query: request.query.clone(),
            outcome: Ok(CharacterPage {
                info: Some(PageInfo {
                    count: u32::try_from(results.len()).unwrap(),
                    pages: 1,
                }),
                results,
            }),
        }
    }

    #[test]
    fn each_query_change_issues_a_new_token() {
        let mut screen = screen();
        let mut cache = QueryCache::default();

        let first = screen.on_query_change("r".to_string(), &mut cache).unwrap();
        let second = screen.on_query_change("r".to_string(), &mut cache).unwrap();

        assert!(second.token > first.token);
        assert_eq!(screen.status.pending_token(), Some(second.token));
    }

    #[test]
    fn whitespace_query_still_issues_a_request() {
        let mut screen = screen();
        let mut cache = QueryCache::default();
        let request = screen.on_query_change(" ".to_string(), &mut cache).unwrap();
        assert!(request.url.ends_with("name=%20"));
    }

    #[test]
    fn completion_maps_results_to_options() {
        let mut screen = screen();
        let mut cache = QueryCache::default();
        let request = screen.on_query_change("rick".to_string(), &mut cache).unwrap();

        let applied = screen.apply_completion(
            &completion(&request, vec![character(1, "Rick Sanchez", 51)]),
            &mut cache,
        );

        assert!(applied);
        assert_eq!(screen.status, SearchStatus::Ready { total: 1 });
        assert_eq!(screen.options.len(), 1);
        assert_eq!(screen.options[0].label, "Rick Sanchez");
        assert_eq!(screen.options[0].value, 1);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut screen = screen();
        let mut cache = QueryCache::default();
        let older = screen.on_query_change("ri".to_string(), &mut cache).unwrap();
        let newer = screen.on_query_change("rick".to_string(), &mut cache).unwrap();

        assert!(screen.apply_completion(&completion(&newer, vec![character(1, "Rick Sanchez", 1)]), &mut cache));
        assert!(!screen.apply_completion(&completion(&older, vec![character(7, "Abradolf Lincler", 1)]), &mut cache));

        assert_eq!(screen.options.len(), 1);
        assert_eq!(screen.options[0].value, 1);
    }

    #[test]
    fn cache_hit_prepopulates_options_while_loading() {
        let mut screen = screen();
        let mut cache = QueryCache::default();
        cache.insert("rick", vec![character(1, "Rick Sanchez", 1)]);

        let request = screen.on_query_change("rick".to_string(), &mut cache);

        assert!(request.is_some());
        assert!(screen.status.is_loading());
        assert_eq!(screen.options.len(), 1);
    }

    #[test]
    fn cache_miss_keeps_only_options_matching_new_text() {
        let mut screen = screen();
        let mut cache = QueryCache::default();
        let request = screen.on_query_change("s".to_string(), &mut cache).unwrap();
        screen.apply_completion(
            &completion(
                &request,
                vec![
                    character(1, "Rick Sanchez", 1),
                    character(2, "Morty Smith", 1),
                    character(3, "Summer Smith", 1),
                ],
            ),
            &mut cache,
        );
        screen.cursor = 2;

        screen.on_query_change("smi".to_string(), &mut cache);

        assert!(screen.status.is_loading());
        let values: Vec<u32> = screen.options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![2, 3]);
        assert_eq!(screen.cursor, 1);
    }

    #[test]
    fn unmatched_leftovers_cannot_be_highlighted() {
        let mut screen = screen();
        let mut cache = QueryCache::default();
        let request = screen.on_query_change("rick".to_string(), &mut cache).unwrap();
        screen.apply_completion(&completion(&request, vec![character(1, "Rick Sanchez", 1)]), &mut cache);

        screen.on_query_change("morty".to_string(), &mut cache);

        assert!(screen.options.is_empty());
        assert!(screen.highlighted_option().is_none());
    }

    #[test]
    fn failure_clears_options_and_sets_message() {
        let mut screen = screen();
        let mut cache = QueryCache::default();
        cache.insert("rick", vec![character(1, "Rick Sanchez", 1)]);
        let request = screen.on_query_change("rick".to_string(), &mut cache).unwrap();

        screen.apply_completion(
            &FetchCompletion {
                token: request.token,
                query: request.query.clone(),
                outcome: Err(FetchFailure::Status(500)),
            },
            &mut cache,
        );

        assert!(screen.options.is_empty());
        assert_eq!(
            screen.status,
            SearchStatus::Failed {
                message: "Error fetching data".to_string()
            }
        );
        assert!(cache.get("rick").is_some());
    }

    #[test]
    fn denied_web_access_fails_without_request() {
        let mut screen = screen();
        let mut cache = QueryCache::default();
        screen.web_access_denied = true;

        assert!(screen.on_query_change("rick".to_string(), &mut cache).is_none());
        assert!(matches!(screen.status, SearchStatus::Failed { .. }));
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut screen = screen();
        screen.options = SelectableOption::from_results(&[
            character(1, "Rick Sanchez", 1),
            character(2, "Morty Smith", 1),
        ]);

        screen.move_cursor_up();
        assert_eq!(screen.cursor, 1);
        screen.move_cursor_down();
        assert_eq!(screen.cursor, 0);
    }

    #[test]
    fn render_row_skips_options_without_character() {
        let screen = screen();
        let store = SelectionStore::new();
        let malformed = SelectableOption {
            label: "ghost".to_string(),
            value: 99,
            character: None,
        };
        assert!(screen.render_row(&malformed, &store).is_none());
    }

    #[test]
    fn render_row_shows_checkbox_thumbnail_and_episode_count() {
        let screen = screen();
        let mut store = SelectionStore::new();
        let rick = character(1, "Rick Sanchez", 51);
        store.set_selection(vec![rick.clone()]);

        let row = screen
            .render_row(&SelectableOption::from_character(rick), &store)
            .unwrap();

        assert!(row.checked);
        assert_eq!(row.thumbnail, "1.jpeg");
        assert_eq!(row.name, "Rick Sanchez");
        assert_eq!(row.episodes, 51);
    }

    #[test]
    fn toggle_removes_only_the_matching_id_with_shared_names() {
        let mut store = SelectionStore::new();
        let first = SelectableOption::from_character(character(1, "Rick Sanchez", 1));
        let twin = SelectableOption::from_character(character(2, "Rick Sanchez", 1));

        SearchScreen::toggle_selection(&first, false, &mut store);
        SearchScreen::toggle_selection(&twin, false, &mut store);
        SearchScreen::toggle_selection(&first, true, &mut store);

        assert_eq!(store.selection().iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn toggle_ignores_malformed_option() {
        let mut store = SelectionStore::new();
        let malformed = SelectableOption {
            label: "ghost".to_string(),
            value: 99,
            character: None,
        };
        assert!(!SearchScreen::toggle_selection(&malformed, false, &mut store));
        assert!(store.selection().is_empty());
    }

    #[test]
    fn viewmodel_windows_around_cursor() {
        let mut screen = screen();
        let store = SelectionStore::new();
        screen.dropdown = Dropdown::Open;
        screen.options = SelectableOption::from_results(
            &(1..=30)
                .map(|id| character(id, &format!("Character {id}"), 1))
                .collect::<Vec<_>>(),
        );
        screen.cursor = 29;

        let vm = screen.compute_viewmodel(&store, 20, 80);

        assert_eq!(vm.rows.len(), 10);
        assert!(vm.rows.last().unwrap().is_highlighted);
        assert_eq!(vm.rows.last().unwrap().name, "Character 30");
    }

    #[test]
    fn closed_dropdown_hides_rows() {
        let mut screen = screen();
        let store = SelectionStore::new();
        screen.options = SelectableOption::from_results(&[character(1, "Rick Sanchez", 1)]);

        let vm = screen.compute_viewmodel(&store, 24, 80);

        assert!(vm.rows.is_empty());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn loading_shows_spinner_and_status() {
        let mut screen = screen();
        let mut cache = QueryCache::default();
        let store = SelectionStore::new();
        screen.on_query_change("rick".to_string(), &mut cache);

        let vm = screen.compute_viewmodel(&store, 24, 80);

        assert!(vm.search_bar.spinner.is_some());
        assert_eq!(vm.status_line.map(|s| s.kind), Some(StatusKind::Loading));
    }

    #[test]
    fn placeholder_only_when_query_empty() {
        let mut screen = screen().with_placeholder("Find someone");
        let store = SelectionStore::new();
        assert_eq!(
            screen.compute_viewmodel(&store, 24, 80).search_bar.placeholder.as_deref(),
            Some("Find someone")
        );

        screen.query = "rick".to_string();
        assert!(screen.compute_viewmodel(&store, 24, 80).search_bar.placeholder.is_none());
    }

    #[test]
    fn highlight_ranges_cover_query_characters() {
        let mut screen = screen();
        screen.query = "rick".to_string();
        let ranges = screen.compute_highlight_ranges("Rick Sanchez", &SkimMatcherV2::default());
        assert_eq!(ranges, vec![(0, 4)]);
    }

    #[test]
    fn badges_stop_at_line_width() {
        let mut store = SelectionStore::new();
        store.set_selection(vec![
            character(1, "Rick Sanchez", 1),
            character(2, "Morty Smith", 1),
        ]);

        let badges = SearchScreen::compute_badges(&store, 20);

        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].label, "Rick Sanchez");
    }

    #[test]
    fn spinner_stops_once_not_loading() {
        let mut screen = screen();
        assert!(screen.arm_spinner());
        assert!(!screen.arm_spinner());
        assert!(!screen.advance_spinner());
        assert!(screen.arm_spinner());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Señor Meeseeks", 6), "Señor…");
        assert_eq!(truncate("Rick", 6), "Rick");
    }
}
