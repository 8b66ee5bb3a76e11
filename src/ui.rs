//! Drawing - everything here is a pure function of a [`RenderState`]

use ratatui::{prelude::*, widgets::*};

use crate::app::state::SearchStatus;
use crate::constants::APP_NAME;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;

/// One rendered result. Identity is the position in the list.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultLink<'a> {
    pub index: usize,
    pub href: &'a str,
    pub text: &'a str,
}

/// Map a result sequence to links, one per element, in order
pub fn result_links(results: &[String]) -> Vec<ResultLink<'_>> {
    results
        .iter()
        .enumerate()
        .map(|(index, url)| ResultLink {
            index,
            href: url,
            text: url,
        })
        .collect()
}

/// Renders the result list. An empty slice gives an empty list.
pub fn results_list<'a>(results: &'a [String], is_focused: bool) -> List<'a> {
    let items: Vec<ListItem> = result_links(results)
        .into_iter()
        .map(|link| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", link.index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    link.text,
                    Style::default().fg(Color::Blue).underlined(),
                ),
            ]))
        })
        .collect();

    let highlight_style = if is_focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default()
    };

    List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(is_focused, false))
                .title(format!(" Results ({}) ", results.len())),
        )
        .highlight_style(highlight_style)
        .highlight_symbol("> ")
}

/// Renders the search input box
pub fn search_bar<'a>(query: &'a str, is_focused: bool, is_editing: bool, is_loading: bool) -> Paragraph<'a> {
    let title = if is_loading { " Search [...] " } else { " Search " };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(is_focused, is_editing))
        .title(title);

    Paragraph::new(query).block(block)
}

fn focus_style(is_focused: bool, is_editing: bool) -> Style {
    if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Status color
pub fn status_color(status: &SearchStatus) -> Color {
    match status {
        SearchStatus::Idle => Color::DarkGray,
        SearchStatus::Loading { .. } => Color::Yellow,
        SearchStatus::Success(_) => Color::Green,
        SearchStatus::Failed(_) => Color::Red,
    }
}

// ============================================================================
// Frame drawing
// ============================================================================

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_heading(f, state, chunks[0]);
    draw_search_bar(f, state, chunks[1]);
    draw_results(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_heading(f: &mut Frame, state: &RenderState, area: Rect) {
    let heading = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::styled(format!(" {}", state.endpoint), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(heading), area);
}

fn draw_search_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::SearchBar;
    let is_editing = is_focused && state.input_mode == InputMode::Editing;

    f.render_widget(
        search_bar(&state.query, is_focused, is_editing, state.status.is_loading()),
        area,
    );

    if is_editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.cursor_column as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_results(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Results;
    let results = state.results();

    if results.is_empty() {
        let (text, color) = match &state.status {
            SearchStatus::Idle => (String::from("Type a query and press Enter."), Color::DarkGray),
            SearchStatus::Loading { query } => (format!("Searching for \"{}\"...", query), Color::Yellow),
            SearchStatus::Success(_) => (String::from("No results."), Color::DarkGray),
            SearchStatus::Failed(e) => (format!("Search failed ({}). See the log for details.", e.kind()), Color::Red),
        };
        let placeholder = Paragraph::new(Span::styled(text, Style::default().fg(color)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(focus_style(is_focused, false))
                    .title(" Results (0) "),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(placeholder, area);
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(results.len() - 1)));
    f.render_stateful_widget(results_list(results, is_focused), area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.input_mode == InputMode::Editing {
        " Enter:search | ESC:stop editing | Ctrl+↑/↓:history | Tab:results "
    } else {
        " e:edit | s:search | ↑/↓:select | Enter/o:open | ?:help | q:quit "
    };

    let summary = match &state.status {
        SearchStatus::Success(results) => format!("{} results in {}ms ", results.len(), state.last_time_ms),
        SearchStatus::Failed(e) => format!("{} error ", e.kind()),
        SearchStatus::Loading { .. } => String::from("Loading... "),
        SearchStatus::Idle => String::new(),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(summary.chars().count() as u16)])
        .split(area);

    f.render_widget(Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)), chunks[0]);
    f.render_widget(
        Paragraph::new(summary).style(Style::default().fg(status_color(&state.status))),
        chunks[1],
    );
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 SEEKER - Keyboard Shortcuts

 SEARCH BAR
   e / /              Edit query
   Enter / s          Search
   ESC                Stop editing
   Ctrl+↑ / Ctrl+↓    Previous / next query

 RESULTS
   Tab                Switch panels
   ↑ / ↓  (k / j)     Select result
   Enter / o          Open in browser

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
