//! Actions - everything that can happen to the app

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::sprite::SpriteData;
use crate::state::CreatureRecord;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    /// Startup: kick off the name catalog fetch
    Init,

    // ===== Catalog category =====
    CatalogDidLoad(Vec<String>),
    CatalogDidError(ApiError),

    // ===== Search category =====
    SearchInput(char),
    SearchBackspace,
    SearchDelete,
    SearchCursorLeft,
    SearchCursorRight,
    SearchCursorHome,
    SearchCursorEnd,

    /// Intent: fetch the creature named by the current query
    SearchSubmit,

    // ===== Suggestion category =====
    SuggestionUp,
    SuggestionDown,

    /// Accept the highlighted (or first) suggestion into the query
    SuggestionCommit,

    /// Pointer activation on a suggestion row
    SuggestionActivate(usize),

    SuggestionDismiss,

    // ===== Creature category =====
    /// Intent: fetch a uniformly random id
    RandomFetch,

    CreatureDidLoad(CreatureRecord),
    CreatureDidError { query: String, error: ApiError },

    // ===== Evolution category =====
    EvolutionDidLoad { creature_id: u32, chain: Vec<String> },
    EvolutionDidError { creature_id: u32, error: String },

    // ===== Sprite category =====
    SpriteDidLoad { creature_id: u32, sprite: SpriteData },
    SpriteDidError { creature_id: u32, error: String },

    // ===== Favorite category =====
    FavoriteAdd,
    FavoriteRemove,

    /// Select a favorite (by index); re-fetches that creature
    FavoriteSelect(usize),

    // ===== Focus category =====
    FocusNext,
    FocusPrev,

    // ===== Dialog category =====
    DialogDismiss,

    // ===== UI category =====
    UiTerminalResize(u16, u16),

    // ===== Uncategorized (global) =====
    Quit,
}
