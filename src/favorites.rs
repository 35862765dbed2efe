//! In-memory favorites: unique display names in insertion order

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FavoritesError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Favorites {
    entries: Vec<String>,
    selected: Option<usize>,
}

impl Favorites {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    /// Append `name` unless already present. Returns whether it was added.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push(name);
        true
    }

    /// Select an entry; out-of-range indices leave the selection alone.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.entries.len() {
            return None;
        }
        self.selected = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Remove the selected entry. The selection is cleared afterwards.
    pub fn remove_selected(&mut self) -> Result<String, FavoritesError> {
        let index = self
            .selected
            .filter(|index| *index < self.entries.len())
            .ok_or(FavoritesError::NoSelection)?;
        self.selected = None;
        Ok(self.entries.remove(index))
    }
}
