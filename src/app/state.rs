//! App state - pure data structure with no I/O logic

use std::collections::VecDeque;

use crate::app::search_bar::SearchBar;
use crate::constants::MAX_HISTORY;
use crate::error::SearchError;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::Query;

/// Outcome of the most recent authoritative search
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading {
        query: Query,
    },
    Success(Vec<String>),
    Failed(SearchError),
}

impl SearchStatus {
    /// Links to show. Empty for every state except `Success`.
    pub fn results(&self) -> &[String] {
        match self {
            SearchStatus::Success(results) => results,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchStatus::Loading { .. })
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub search_bar: SearchBar,
    pub status: SearchStatus,

    // Generation counter: only the latest started search may commit
    pub next_search_id: u64,
    pub latest_search_id: Option<u64>,
    pub last_time_ms: u64,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub selected: usize,
    pub show_help: bool,

    // Query history, most recent first
    pub history: VecDeque<Query>,
    pub history_index: Option<usize>,

    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        AppState {
            search_bar: SearchBar::new(),
            status: SearchStatus::Idle,
            next_search_id: 1,
            latest_search_id: None,
            last_time_ms: 0,
            active_panel: Panel::SearchBar,
            input_mode: InputMode::Editing,
            selected: 0,
            show_help: false,
            history: VecDeque::with_capacity(MAX_HISTORY),
            history_index: None,
            endpoint: endpoint.into(),
        }
    }

    /// Generate a unique search ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_search_id;
        self.next_search_id += 1;
        id
    }

    /// Currently displayed results
    pub fn results(&self) -> &[String] {
        self.status.results()
    }

    /// Remember a query, collapsing an immediate repeat
    pub fn push_history(&mut self, query: &str) {
        if self.history.front().map(String::as_str) == Some(query) {
            return;
        }
        if self.history.len() >= MAX_HISTORY {
            self.history.pop_back();
        }
        self.history.push_front(query.to_string());
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            query: self.search_bar.query().to_string(),
            cursor_column: self.search_bar.cursor_column(),
            status: self.status.clone(),
            selected: self.selected,
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            show_help: self.show_help,
            history_index: self.history_index,
            last_time_ms: self.last_time_ms,
            endpoint: self.endpoint.clone(),
        }
    }
}
