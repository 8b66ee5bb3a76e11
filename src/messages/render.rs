//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::SearchStatus;
use crate::constants::DEFAULT_ENDPOINT;
use crate::messages::ui_events::{InputMode, Panel};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Search bar
    pub query: String,
    pub cursor_column: usize,

    // Results
    pub status: SearchStatus,
    pub selected: usize,
    pub last_time_ms: u64,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub history_index: Option<usize>,

    pub endpoint: String,
}

impl RenderState {
    pub fn results(&self) -> &[String] {
        self.status.results()
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            query: String::new(),
            cursor_column: 0,
            status: SearchStatus::Idle,
            selected: 0,
            last_time_ms: 0,
            active_panel: Panel::SearchBar,
            input_mode: InputMode::Editing,
            show_help: false,
            history_index: None,
            endpoint: String::from(DEFAULT_ENDPOINT),
        }
    }
}
