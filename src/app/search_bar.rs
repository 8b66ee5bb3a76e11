//! Search bar - local input text and cursor, knows nothing about the network

use crate::models::Query;

/// Editable single-line query input.
///
/// `cursor` is a byte offset and always sits on a char boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchBar {
    input: String,
    cursor: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position in characters, for placing the terminal cursor
    pub fn cursor_column(&self) -> usize {
        self.input[..self.cursor].chars().count()
    }

    /// Hand the current text to the caller. Not cleared, not validated.
    pub fn submit(&self) -> Query {
        self.input.clone()
    }

    /// Replace the text (used for history recall), cursor goes to the end
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.input = query.into();
        self.cursor = self.input.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.input.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.input[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.input.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    fn prev_boundary(&self) -> usize {
        self.input[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
