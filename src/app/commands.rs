//! Command handlers - business logic for processing UI events

use crate::app::state::SearchStatus;
use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Query;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.focus(self.active_panel.next());
    }

    pub fn prev_panel(&mut self) {
        self.focus(self.active_panel.prev());
    }

    fn focus(&mut self, panel: Panel) {
        self.active_panel = panel;
        self.input_mode = match panel {
            Panel::SearchBar => InputMode::Editing,
            Panel::Results => InputMode::Normal,
        };
    }

    // ========================
    // Search bar editing
    // ========================

    pub fn start_editing(&mut self) {
        self.active_panel = Panel::SearchBar;
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        self.search_bar.insert_char(c);
        self.history_index = None;
    }

    pub fn delete_char(&mut self) {
        self.search_bar.delete_char();
        self.history_index = None;
    }

    pub fn move_cursor_left(&mut self) {
        self.search_bar.move_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.search_bar.move_right();
    }

    pub fn move_cursor_home(&mut self) {
        self.search_bar.move_home();
    }

    pub fn move_cursor_end(&mut self) {
        self.search_bar.move_end();
    }

    // ========================
    // Results list
    // ========================

    pub fn select_prev(&mut self) {
        let len = self.results().len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn select_next(&mut self) {
        let len = self.results().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// URL under the selection, if any
    pub fn selected_url(&self) -> Option<&str> {
        self.results().get(self.selected).map(String::as_str)
    }

    // ========================
    // History
    // ========================

    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        let idx = match self.history_index {
            None => 0,
            Some(i) if i + 1 < self.history.len() => i + 1,
            Some(i) => i,
        };

        if let Some(query) = self.history.get(idx).cloned() {
            self.search_bar.set_query(query);
            self.history_index = Some(idx);
        }
    }

    pub fn history_next(&mut self) {
        match self.history_index {
            Some(0) => {
                self.history_index = None;
                self.search_bar.set_query(String::new());
            }
            Some(i) => {
                if let Some(query) = self.history.get(i - 1).cloned() {
                    self.search_bar.set_query(query);
                    self.history_index = Some(i - 1);
                }
            }
            None => {}
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Search lifecycle
    // ========================

    /// Submit whatever is in the search bar
    pub fn submit(&mut self) -> NetworkCommand {
        let query = self.search_bar.submit();
        self.handle_search(query)
    }

    /// Start a search: Idle -> Loading. Every call issues a new request,
    /// even while another one is still in flight.
    pub fn handle_search(&mut self, query: Query) -> NetworkCommand {
        let id = self.next_id();
        self.latest_search_id = Some(id);
        self.push_history(&query);
        self.history_index = None;
        self.status = SearchStatus::Loading {
            query: query.clone(),
        };

        tracing::info!(id, query = %query, "Search started");
        NetworkCommand::Search { id, query }
    }

    /// Commit a finished search. Returns false when the response was stale
    /// and has been dropped.
    pub fn handle_response(&mut self, response: NetworkResponse) -> bool {
        let id = response.id();
        if self.latest_search_id != Some(id) {
            tracing::debug!(id, latest = ?self.latest_search_id, "Discarding stale search response");
            return false;
        }

        self.last_time_ms = response.time_ms();
        self.selected = 0;
        self.status = match response {
            NetworkResponse::Results { results, .. } => {
                tracing::info!(id, count = results.len(), time_ms = self.last_time_ms, "Search completed");
                SearchStatus::Success(results)
            }
            NetworkResponse::Failed { error, .. } => SearchStatus::Failed(error),
        };
        true
    }
}
