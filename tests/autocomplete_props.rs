//! Property tests for the autocomplete field and favorites list.

use pokedex_tui::autocomplete::{Autocomplete, CandidateList, Overlay};
use pokedex_tui::favorites::Favorites;
use proptest::prelude::*;

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z][a-z-]{0,7}", 0..40)
}

fn field(names: Vec<String>, query: &str) -> Autocomplete {
    let mut search = Autocomplete::new(CandidateList::new(names));
    search.set_query(query);
    search
}

proptest! {
    #[test]
    fn suggestions_are_exact_prefix_matches(names in names_strategy(), query in "[a-zA-Z]{0,3}") {
        let search = field(names.clone(), &query);
        let pattern = query.to_lowercase();
        let expected = names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&pattern))
            .count();

        prop_assert_eq!(search.suggestions().len(), expected);
        for suggestion in search.suggestions() {
            prop_assert!(suggestion.to_lowercase().starts_with(&pattern));
        }
    }

    #[test]
    fn overlay_open_iff_query_has_matches(names in names_strategy(), query in "[a-z]{0,3}") {
        let search = field(names, &query);
        let should_open = !query.is_empty() && !search.suggestions().is_empty();

        prop_assert_eq!(search.is_open(), should_open);
        if should_open {
            prop_assert_eq!(search.overlay(), Overlay::Open { highlighted: None });
        }
    }

    #[test]
    fn highlight_stays_in_bounds(names in names_strategy(), query in "[a-z]{1,2}", downs in 0usize..60, ups in 0usize..60) {
        let mut search = field(names, &query);
        for _ in 0..downs {
            search.move_down();
        }
        for _ in 0..ups {
            search.move_up();
        }

        match search.highlighted() {
            Some(index) => prop_assert!(index < search.suggestions().len()),
            None => prop_assert!(downs == 0 || !search.is_open()),
        }
    }

    #[test]
    fn commit_closes_with_a_suggestion(names in names_strategy(), query in "[a-z]{1,2}") {
        let mut search = field(names, &query);
        let was_open = search.is_open();
        let first = search.suggestions().first().cloned();

        let committed = search.commit();

        prop_assert!(!search.is_open());
        if was_open {
            prop_assert_eq!(committed.as_deref(), first.as_deref());
            prop_assert_eq!(Some(search.query()), first.as_deref());
        } else {
            prop_assert_eq!(committed, None);
        }
    }

    #[test]
    fn favorites_add_is_idempotent(names in prop::collection::vec("[A-Z][a-z]{0,5}", 0..20)) {
        let mut favorites = Favorites::default();
        for name in &names {
            favorites.add(name.clone());
        }
        let len = favorites.len();
        for name in &names {
            prop_assert!(!favorites.add(name.clone()));
        }

        prop_assert_eq!(favorites.len(), len);
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(len, unique.len());
    }
}
