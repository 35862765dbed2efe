//! Autocomplete input: a text field bound to a fixed candidate list
//!
//! The field owns the query text and its edit cursor, derives the
//! suggestion set from the candidate list on every edit, and drives a
//! suggestion overlay through a small state machine:
//!
//! ```text
//! Closed --edit, query non-empty and >= 1 match--> Open { highlighted: None }
//! Open   --edit, query empty or 0 matches-------> Closed
//! Open   --edit, still >= 1 match---------------> Open { highlighted: None }
//! Open   --up / down----------------------------> Open { highlighted: clamped }
//! Open   --commit-------------------------------> Closed (query = suggestion)
//! Open   --dismiss------------------------------> Closed (query untouched)
//! ```
//!
//! Nothing here knows about terminals; rendering lives in
//! `components::search_bar`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Known creature names, sorted case-insensitively. Never mutated after
/// construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CandidateList {
    names: Vec<String>,
}

impl CandidateList {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort_by_cached_key(|name| name.to_lowercase());
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Case-insensitive prefix filter, in candidate order.
    pub fn recompute(&self, query: &str) -> Vec<String> {
        let pattern = query.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&pattern))
            .cloned()
            .collect()
    }
}

impl From<Vec<String>> for CandidateList {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

/// Suggestion overlay visibility and highlight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Overlay {
    #[default]
    Closed,
    Open { highlighted: Option<usize> },
}

/// Result of pointer activation on a suggestion row
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Highlighted(usize),
    Committed(String),
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Autocomplete {
    candidates: CandidateList,
    query: String,
    /// Edit cursor, in chars
    cursor: usize,
    suggestions: Vec<String>,
    overlay: Overlay,
}

impl Autocomplete {
    pub fn new(candidates: CandidateList) -> Self {
        Self {
            candidates,
            ..Default::default()
        }
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn is_open(&self) -> bool {
        matches!(self.overlay, Overlay::Open { .. })
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self.overlay {
            Overlay::Open { highlighted } => highlighted,
            Overlay::Closed => None,
        }
    }

    /// Rows the overlay shows right now (empty while closed).
    pub fn visible_suggestions(&self) -> &[String] {
        if self.is_open() {
            &self.suggestions
        } else {
            &[]
        }
    }

    /// Swap in the loaded catalog and re-filter the current query.
    pub fn set_candidates(&mut self, candidates: CandidateList) {
        self.candidates = candidates;
        self.refresh();
    }

    /// Replace the whole query; the cursor lands at the end.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.cursor = self.char_len();
        self.refresh();
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.query.insert(at, ch);
        self.cursor += 1;
        self.refresh();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.query.remove(at);
        self.refresh();
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.query.remove(at);
        self.refresh();
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn cursor_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn cursor_end(&mut self) -> bool {
        let end = self.char_len();
        let moved = self.cursor != end;
        self.cursor = end;
        moved
    }

    pub fn move_up(&mut self) -> bool {
        let Overlay::Open { highlighted } = self.overlay else {
            return false;
        };
        let next = match highlighted {
            None => None,
            Some(index) => Some(index.saturating_sub(1)),
        };
        self.set_highlight(next, highlighted)
    }

    pub fn move_down(&mut self) -> bool {
        let Overlay::Open { highlighted } = self.overlay else {
            return false;
        };
        let Some(last) = self.suggestions.len().checked_sub(1) else {
            return false;
        };
        let next = match highlighted {
            None => 0,
            Some(index) => (index + 1).min(last),
        };
        self.set_highlight(Some(next), highlighted)
    }

    /// Accept the highlighted suggestion, or the first one when nothing is
    /// highlighted. Returns the committed text.
    pub fn commit(&mut self) -> Option<String> {
        let Overlay::Open { highlighted } = self.overlay else {
            return None;
        };
        let chosen = self.suggestions.get(highlighted.unwrap_or(0))?.clone();
        self.accept(chosen.clone());
        Some(chosen)
    }

    /// Pointer activation: the first activation highlights a row, a second
    /// activation on the highlighted row commits it.
    pub fn activate(&mut self, index: usize) -> Activation {
        let Overlay::Open { highlighted } = self.overlay else {
            return Activation::Ignored;
        };
        let Some(chosen) = self.suggestions.get(index).cloned() else {
            return Activation::Ignored;
        };
        if highlighted == Some(index) {
            self.accept(chosen.clone());
            return Activation::Committed(chosen);
        }
        self.overlay = Overlay::Open {
            highlighted: Some(index),
        };
        Activation::Highlighted(index)
    }

    /// Close the overlay without touching the query (focus loss, Esc).
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.is_open();
        self.overlay = Overlay::Closed;
        was_open
    }

    fn accept(&mut self, text: String) {
        self.query = text;
        self.cursor = self.char_len();
        self.suggestions = self.candidates.recompute(&self.query);
        self.overlay = Overlay::Closed;
    }

    fn set_highlight(&mut self, next: Option<usize>, previous: Option<usize>) -> bool {
        self.overlay = Overlay::Open { highlighted: next };
        next != previous
    }

    fn refresh(&mut self) {
        self.suggestions = self.candidates.recompute(&self.query);
        self.overlay = if !self.query.is_empty() && !self.suggestions.is_empty() {
            Overlay::Open { highlighted: None }
        } else {
            Overlay::Closed
        };
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.query.len())
    }
}
