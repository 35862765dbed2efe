//! End-to-end flows through EffectStoreTestHarness: user input, emitted
//! effects, then the async completions those effects would produce.

use pretty_assertions::assert_eq;
use tui_dispatch::testing::*;
use tui_dispatch::NumericComponentId;
use pokedex_tui::{
    action::Action,
    components::{Component, SearchBar, SearchBarProps},
    effect::Effect,
    error::ApiError,
    reducer::reducer,
    sprite::SpriteData,
    state::{AppState, CreatureRecord, CreatureStat},
};

fn mock_creature(id: u32, name: &str) -> CreatureRecord {
    CreatureRecord {
        id,
        name: name.into(),
        height: 4,
        weight: 60,
        types: vec!["electric".into()],
        abilities: vec!["static".into(), "lightning-rod".into()],
        stats: vec![CreatureStat {
            name: "hp".into(),
            value: 35,
        }],
        sprite_url: Some(format!("https://img.example/{id}.png")),
        species_url: format!("https://pokeapi.co/api/v2/pokemon-species/{id}/"),
        moves: vec!["mega-punch".into(), "pay-day".into()],
    }
}

fn mock_sprite() -> SpriteData {
    SpriteData {
        width: 1,
        height: 1,
        rgba: vec![255, 0, 0, 255],
    }
}

#[test]
fn test_startup_loads_catalog() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::Init);
    harness.assert_state(|s| s.catalog.is_loading());
    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::LoadCatalog));

    harness.complete_action(Action::CatalogDidLoad(vec![
        "pikachu".into(),
        "bulbasaur".into(),
    ]));
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    harness.assert_state(|s| s.catalog.data() == Some(&2));
    harness.assert_state(|s| s.search.candidates().names()[0] == "bulbasaur");
}

#[test]
fn test_catalog_failure_keeps_search_usable() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::Init);
    harness.drain_effects();
    harness.complete_action(Action::CatalogDidError(ApiError::Status(
        503,
        "https://pokeapi.co/api/v2/pokemon?limit=1010".into(),
    )));
    harness.process_emitted();

    harness.assert_state(|s| s.catalog.is_failed());
    harness.assert_state(|s| {
        s.dialog
            .as_ref()
            .is_some_and(|d| d.message.contains("Failed to load Pokémon names"))
    });

    // Blocked until the error is acknowledged.
    harness.dispatch_collect(Action::SearchInput('7'));
    harness.assert_state(|s| s.search.query().is_empty());
    harness.dispatch_collect(Action::DialogDismiss);

    harness.dispatch_collect(Action::SearchInput('7'));
    harness.dispatch_collect(Action::SearchSubmit);
    harness.assert_state(|s| !s.search.is_open());
    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::LoadCreature { query } if query == "7"));
}

#[test]
fn test_search_load_evolution_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut search = SearchBar::new();

    harness.dispatch_collect(Action::CatalogDidLoad(vec!["pikachu".into()]));

    let actions = harness.send_keys::<NumericComponentId, _, _>("p i k a", |state, event| {
        search
            .handle_event(
                &event.kind,
                SearchBarProps {
                    search: &state.search,
                    is_focused: true,
                    overlay_area: Default::default(),
                },
            )
            .into_iter()
            .collect::<Vec<_>>()
    });
    for action in actions {
        harness.dispatch_collect(action);
    }
    harness.assert_state(|s| s.search.is_open());

    harness.dispatch_collect(Action::SuggestionCommit);
    harness.assert_state(|s| s.search.query() == "pikachu");
    harness.dispatch_collect(Action::SearchSubmit);
    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::LoadCreature { query } if query == "pikachu"));

    harness.complete_action(Action::CreatureDidLoad(mock_creature(25, "pikachu")));
    harness.process_emitted();
    harness.assert_state(|s| s.pending_lookup.is_none());
    harness.assert_state(|s| s.evolution_loading && s.sprite_loading);

    let effects = harness.drain_effects();
    effects.effects_count(2);
    effects.effects_first_matches(|e| {
        matches!(e, Effect::LoadEvolution { creature_id: 25, species_url } if species_url.ends_with("/25/"))
    });

    harness.complete_action(Action::EvolutionDidLoad {
        creature_id: 25,
        chain: vec!["pichu".into(), "pikachu".into(), "raichu".into()],
    });
    harness.complete_action(Action::SpriteDidLoad {
        creature_id: 25,
        sprite: mock_sprite(),
    });
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (2, 2));

    harness.assert_state(|s| !s.evolution_loading && !s.sprite_loading);
    harness.assert_state(|s| s.evolution.as_ref().is_some_and(|chain| chain.len() == 3));
    harness.assert_state(|s| s.sprite.is_some());
}

#[test]
fn test_stale_results_are_ignored() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::CreatureDidLoad(mock_creature(25, "pikachu")));
    harness.dispatch_collect(Action::CreatureDidLoad(mock_creature(133, "eevee")));
    harness.drain_effects();

    harness.complete_action(Action::EvolutionDidLoad {
        creature_id: 25,
        chain: vec!["pichu".into()],
    });
    harness.complete_action(Action::SpriteDidLoad {
        creature_id: 25,
        sprite: mock_sprite(),
    });
    let (changed, _) = harness.process_emitted();

    assert_eq!(changed, 0);
    harness.assert_state(|s| s.evolution.is_none() && s.evolution_loading);
    harness.assert_state(|s| s.sprite.is_none() && s.sprite_loading);
}

#[test]
fn test_not_found_shows_dialog_and_keeps_record() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::CreatureDidLoad(mock_creature(25, "pikachu")));
    harness.drain_effects();

    for ch in "missingno".chars() {
        harness.dispatch_collect(Action::SearchInput(ch));
    }
    harness.dispatch_collect(Action::SearchSubmit);
    harness.complete_action(Action::CreatureDidError {
        query: "missingno".into(),
        error: ApiError::NotFound("missingno".into()),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.pending_lookup.is_none());
    harness.assert_state(|s| s.creature.as_ref().is_some_and(|c| c.name == "pikachu"));
    harness.assert_state(|s| {
        s.dialog
            .as_ref()
            .is_some_and(|d| d.message.contains("not found"))
    });

    harness.dispatch_collect(Action::DialogDismiss);
    harness.assert_state(|s| !s.has_dialog());
}

#[test]
fn test_favorites_are_unique() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::CreatureDidLoad(mock_creature(122, "mr-mime")));

    harness.dispatch_collect(Action::FavoriteAdd);
    harness.dispatch_collect(Action::FavoriteAdd);

    harness.assert_state(|s| s.favorites.entries() == ["Mr-Mime".to_string()]);

    harness.dispatch_collect(Action::FavoriteSelect(0));
    harness.dispatch_collect(Action::FavoriteRemove);
    harness.assert_state(|s| s.favorites.is_empty());
    harness.assert_state(|s| !s.has_dialog());
}

#[test]
fn test_random_fetch_stays_in_range() {
    let mut harness = EffectStoreTestHarness::new(AppState::new(3, 42), reducer);

    for _ in 0..50 {
        harness.dispatch_collect(Action::RandomFetch);
        let effects = harness.drain_effects();
        effects.effects_count(1);
        effects.effects_first_matches(|e| match e {
            Effect::LoadCreature { query } => {
                matches!(query.parse::<u32>(), Ok(id) if (1..=3).contains(&id))
            }
            _ => false,
        });
    }
}

#[test]
fn test_sprite_failure_clears_sprite_without_dialog() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::CreatureDidLoad(mock_creature(25, "pikachu")));

    harness.complete_action(Action::SpriteDidError {
        creature_id: 25,
        error: "unsupported image format".into(),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.sprite.is_none() && !s.sprite_loading);
    harness.assert_state(|s| !s.has_dialog());
}
