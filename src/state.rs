//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::autocomplete::Autocomplete;
use crate::config::DEFAULT_RANDOM_MAX;
use crate::favorites::Favorites;
use crate::sprite::SpriteData;

/// One fetched creature, overwritten by each successful lookup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreatureRecord {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<CreatureStat>,
    pub sprite_url: Option<String>,
    pub species_url: String,
    pub moves: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreatureStat {
    pub name: String,
    pub value: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Focus {
    #[default]
    Search,
    Favorites,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Search => Focus::Favorites,
            Focus::Favorites => Focus::Search,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DialogKind {
    Warning,
    Error,
}

/// Blocking message box; all other input waits until it is dismissed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn new(kind: DialogKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Name catalog lifecycle; holds the name count once loaded
    #[debug(section = "Catalog", label = "Names", debug_fmt)]
    pub catalog: DataResource<usize>,

    /// Search field with suggestion overlay
    #[debug(skip)]
    pub search: Autocomplete,

    #[debug(section = "UI", label = "Focus", debug_fmt)]
    pub focus: Focus,

    #[debug(section = "UI", label = "Dialog", debug_fmt)]
    pub dialog: Option<Dialog>,

    #[debug(section = "UI", label = "Status", debug_fmt)]
    pub status: Option<String>,

    /// Currently displayed record
    #[debug(skip)]
    pub creature: Option<CreatureRecord>,

    /// Lookup in flight (name or id as sent)
    #[debug(section = "Creature", label = "Pending", debug_fmt)]
    pub pending_lookup: Option<String>,

    /// First-branch evolution chain for the displayed record
    #[debug(section = "Creature", label = "Evolution", debug_fmt)]
    pub evolution: Option<Vec<String>>,

    #[debug(section = "Creature", label = "Evolution loading")]
    pub evolution_loading: bool,

    #[debug(skip)]
    pub sprite: Option<SpriteData>,

    #[debug(section = "Creature", label = "Sprite loading")]
    pub sprite_loading: bool,

    #[debug(section = "Favorites", label = "Entries", debug_fmt)]
    pub favorites: Favorites,

    /// Inclusive upper bound for random lookups
    #[debug(section = "Random", label = "Max id")]
    pub random_max: u32,

    #[debug(skip)]
    pub rng_seed: u64,

    #[debug(skip)]
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(random_max: u32, rng_seed: u64) -> Self {
        Self {
            catalog: DataResource::Empty,
            search: Autocomplete::default(),
            focus: Focus::Search,
            dialog: None,
            status: None,
            creature: None,
            pending_lookup: None,
            evolution: None,
            evolution_loading: false,
            sprite: None,
            sprite_loading: false,
            favorites: Favorites::default(),
            random_max: random_max.max(1),
            rng_seed,
            terminal_size: (80, 24),
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    /// Title-cased name of the displayed record, as stored in favorites.
    pub fn creature_display_name(&self) -> Option<String> {
        self.creature
            .as_ref()
            .map(|record| crate::presenter::title_case(&record.name))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_MAX, 0x5eed)
    }
}
