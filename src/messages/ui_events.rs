//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,

    // Search bar editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Search
    Submit,

    // Results list
    SelectPrev,
    SelectNext,
    OpenSelected,

    // Query history
    HistoryPrev,
    HistoryNext,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused panel (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    SearchBar,
    Results,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::SearchBar => Panel::Results,
            Panel::Results => Panel::SearchBar,
        }
    }

    pub fn prev(&self) -> Panel {
        // Only two panels, so cycling either way lands on the other one
        self.next()
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    Normal,
    #[default]
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Up => return Some(UiEvent::HistoryPrev),
            KeyCode::Down => return Some(UiEvent::HistoryNext),
            _ => {}
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => handle_normal_keys(key, active_panel),
        InputMode::Editing => handle_editing_keys(key),
    }
}

fn handle_normal_keys(key: KeyEvent, active_panel: Panel) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Tab => Some(UiEvent::NextPanel),
        KeyCode::BackTab => Some(UiEvent::PrevPanel),
        KeyCode::Char('e') | KeyCode::Char('/') => Some(UiEvent::StartEditing),
        KeyCode::Char('s') => Some(UiEvent::Submit),
        KeyCode::Enter => match active_panel {
            Panel::SearchBar => Some(UiEvent::Submit),
            Panel::Results => Some(UiEvent::OpenSelected),
        },
        KeyCode::Char('o') if active_panel == Panel::Results => Some(UiEvent::OpenSelected),
        KeyCode::Up | KeyCode::Char('k') if active_panel == Panel::Results => {
            Some(UiEvent::SelectPrev)
        }
        KeyCode::Down | KeyCode::Char('j') if active_panel == Panel::Results => {
            Some(UiEvent::SelectNext)
        }
        _ => None,
    }
}

fn handle_editing_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Enter => Some(UiEvent::Submit),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Home => Some(UiEvent::CursorHome),
        KeyCode::End => Some(UiEvent::CursorEnd),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Tab => Some(UiEvent::NextPanel),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}
