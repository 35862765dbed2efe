//! Error taxonomy and the user-facing notices derived from it

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Dialog, DialogKind};

/// Failure talking to PokeAPI
#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("HTTP {0} from {1}")]
    Status(u16, String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("response parse error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum FavoritesError {
    #[error("no favorite selected")]
    NoSelection,
}

/// Everything the shell reports through a modal dialog
#[derive(Clone, Debug, PartialEq)]
pub enum UserNotice {
    /// Search triggered with blank text
    EmptyInput,
    /// Add-favorite with nothing loaded
    NoCreatureLoaded,
    /// Remove-favorite with nothing selected
    NoSelection,
    /// Name catalog fetch failed
    Catalog(ApiError),
    /// Detail fetch failed
    Network(ApiError),
}

impl UserNotice {
    pub fn dialog(&self) -> Dialog {
        match self {
            UserNotice::EmptyInput => Dialog::new(
                DialogKind::Warning,
                "Input Needed",
                "Please enter a Pokémon name or ID.",
            ),
            UserNotice::NoCreatureLoaded => Dialog::new(
                DialogKind::Warning,
                "No Pokémon",
                "Please search or get a Pokémon first.",
            ),
            UserNotice::NoSelection => Dialog::new(
                DialogKind::Warning,
                "No Selection",
                "Please select a favorite to remove.",
            ),
            UserNotice::Catalog(err) => Dialog::new(
                DialogKind::Error,
                "Error",
                format!("Failed to load Pokémon names; suggestions are disabled.\n{err}"),
            ),
            UserNotice::Network(err) if err.is_not_found() => Dialog::new(
                DialogKind::Error,
                "Error",
                "Pokémon not found. Check the name or ID.",
            ),
            UserNotice::Network(err) => Dialog::new(
                DialogKind::Error,
                "Error",
                format!("Failed to retrieve Pokémon.\n{err}"),
            ),
        }
    }
}

impl From<FavoritesError> for UserNotice {
    fn from(err: FavoritesError) -> Self {
        match err {
            FavoritesError::NoSelection => UserNotice::NoSelection,
        }
    }
}
