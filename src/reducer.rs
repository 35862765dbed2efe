//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::autocomplete::{Activation, CandidateList};
use crate::effect::Effect;
use crate::error::UserNotice;
use crate::state::{AppState, Focus};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    // Dialogs are modal: user intents wait until it is dismissed.
    if state.has_dialog() && is_user_intent(&action) {
        return DispatchResult::unchanged();
    }

    match action {
        Action::Init => {
            if state.catalog.is_loaded() || state.catalog.is_loading() {
                return DispatchResult::unchanged();
            }
            state.catalog = DataResource::Loading;
            state.status = Some("Loading Pokémon names...".into());
            DispatchResult::changed_with(Effect::LoadCatalog)
        }

        // ===== Catalog =====
        Action::CatalogDidLoad(names) => {
            // The candidate list is set once per run.
            if state.catalog.is_loaded() {
                return DispatchResult::unchanged();
            }
            let candidates = CandidateList::new(names);
            state.catalog = DataResource::Loaded(candidates.len());
            state.status = candidates
                .is_empty()
                .then(|| "Name list empty, suggestions disabled".to_string());
            state.search.set_candidates(candidates);
            DispatchResult::changed()
        }

        Action::CatalogDidError(error) => {
            state.catalog = DataResource::Failed(error.to_string());
            state.status = Some("Name list unavailable, suggestions disabled".into());
            show_notice(state, UserNotice::Catalog(error));
            DispatchResult::changed()
        }

        // ===== Search field =====
        Action::SearchInput(ch) => {
            state.search.insert_char(ch);
            DispatchResult::changed()
        }
        Action::SearchBackspace => changed_if(state.search.backspace()),
        Action::SearchDelete => changed_if(state.search.delete()),
        Action::SearchCursorLeft => changed_if(state.search.cursor_left()),
        Action::SearchCursorRight => changed_if(state.search.cursor_right()),
        Action::SearchCursorHome => changed_if(state.search.cursor_home()),
        Action::SearchCursorEnd => changed_if(state.search.cursor_end()),

        Action::SearchSubmit => {
            let query = state.search.query().trim().to_lowercase();
            state.search.dismiss();
            if query.is_empty() {
                show_notice(state, UserNotice::EmptyInput);
                return DispatchResult::changed();
            }
            start_lookup(state, query)
        }

        // ===== Suggestion overlay =====
        Action::SuggestionUp => changed_if(state.search.move_up()),
        Action::SuggestionDown => changed_if(state.search.move_down()),
        Action::SuggestionCommit => changed_if(state.search.commit().is_some()),
        Action::SuggestionActivate(index) => match state.search.activate(index) {
            Activation::Ignored => DispatchResult::unchanged(),
            Activation::Highlighted(_) | Activation::Committed(_) => DispatchResult::changed(),
        },
        Action::SuggestionDismiss => changed_if(state.search.dismiss()),

        // ===== Creature lookup =====
        Action::RandomFetch => {
            let id = next_rand(state) % state.random_max.max(1) + 1;
            state.search.dismiss();
            start_lookup(state, id.to_string())
        }

        Action::CreatureDidLoad(record) => {
            state.pending_lookup = None;
            state.status = None;
            state.evolution = None;
            state.evolution_loading = true;
            state.sprite = None;

            let mut effects = vec![Effect::LoadEvolution {
                creature_id: record.id,
                species_url: record.species_url.clone(),
            }];
            state.sprite_loading = match &record.sprite_url {
                Some(url) => {
                    effects.push(Effect::LoadSprite {
                        creature_id: record.id,
                        url: url.clone(),
                    });
                    true
                }
                None => false,
            };
            state.creature = Some(record);
            DispatchResult::changed_with_many(effects)
        }

        Action::CreatureDidError { query, error } => {
            // A failure for a lookup the user already replaced stays silent.
            if state.pending_lookup.as_deref() != Some(query.as_str()) {
                return DispatchResult::unchanged();
            }
            state.pending_lookup = None;
            state.status = None;
            show_notice(state, UserNotice::Network(error));
            DispatchResult::changed()
        }

        Action::EvolutionDidLoad { creature_id, chain } => {
            if !is_current(state, creature_id) {
                return DispatchResult::unchanged();
            }
            state.evolution = Some(chain);
            state.evolution_loading = false;
            DispatchResult::changed()
        }

        Action::EvolutionDidError { creature_id, .. } => {
            if !is_current(state, creature_id) {
                return DispatchResult::unchanged();
            }
            state.evolution = None;
            state.evolution_loading = false;
            DispatchResult::changed()
        }

        Action::SpriteDidLoad {
            creature_id,
            sprite,
        } => {
            if !is_current(state, creature_id) {
                return DispatchResult::unchanged();
            }
            state.sprite = Some(sprite);
            state.sprite_loading = false;
            DispatchResult::changed()
        }

        Action::SpriteDidError { creature_id, .. } => {
            if !is_current(state, creature_id) {
                return DispatchResult::unchanged();
            }
            state.sprite = None;
            state.sprite_loading = false;
            DispatchResult::changed()
        }

        // ===== Favorites =====
        Action::FavoriteAdd => {
            let Some(name) = state.creature_display_name() else {
                show_notice(state, UserNotice::NoCreatureLoaded);
                return DispatchResult::changed();
            };
            if state.favorites.add(name.clone()) {
                state.status = Some(format!("Added {name} to favorites"));
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::FavoriteRemove => {
            match state.favorites.remove_selected() {
                Ok(name) => state.status = Some(format!("Removed {name} from favorites")),
                Err(err) => show_notice(state, err.into()),
            }
            DispatchResult::changed()
        }

        Action::FavoriteSelect(index) => {
            let Some(name) = state.favorites.select(index).map(str::to_lowercase) else {
                return DispatchResult::unchanged();
            };
            start_lookup(state, name)
        }

        // ===== Focus =====
        Action::FocusNext | Action::FocusPrev => {
            state.focus = state.focus.toggle();
            if state.focus != Focus::Search {
                state.search.dismiss();
            }
            DispatchResult::changed()
        }

        Action::DialogDismiss => changed_if(state.dialog.take().is_some()),

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn is_user_intent(action: &Action) -> bool {
    matches!(
        action,
        Action::SearchInput(_)
            | Action::SearchBackspace
            | Action::SearchDelete
            | Action::SearchCursorLeft
            | Action::SearchCursorRight
            | Action::SearchCursorHome
            | Action::SearchCursorEnd
            | Action::SearchSubmit
            | Action::SuggestionUp
            | Action::SuggestionDown
            | Action::SuggestionCommit
            | Action::SuggestionActivate(_)
            | Action::SuggestionDismiss
            | Action::RandomFetch
            | Action::FavoriteAdd
            | Action::FavoriteRemove
            | Action::FavoriteSelect(_)
            | Action::FocusNext
            | Action::FocusPrev
    )
}

fn start_lookup(state: &mut AppState, query: String) -> DispatchResult<Effect> {
    state.status = Some(format!("Fetching {query}..."));
    state.pending_lookup = Some(query.clone());
    DispatchResult::changed_with(Effect::LoadCreature { query })
}

fn show_notice(state: &mut AppState, notice: UserNotice) {
    state.dialog = Some(notice.dialog());
}

fn is_current(state: &AppState, creature_id: u32) -> bool {
    state
        .creature
        .as_ref()
        .is_some_and(|record| record.id == creature_id)
}

fn changed_if(changed: bool) -> DispatchResult<Effect> {
    if changed {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}

fn next_rand(state: &mut AppState) -> u32 {
    state.rng_seed = state
        .rng_seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1);
    (state.rng_seed >> 32) as u32
}
