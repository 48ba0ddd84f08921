//! Round behaviour driven through the public controller API.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wordmatch::game::{Column, MatchController, MatchState, MatchedPair, WordPair, VOCABULARY};

fn word(russian: &str) -> WordPair {
    *VOCABULARY
        .iter()
        .find(|w| w.russian == russian)
        .expect("word in vocabulary")
}

fn english(english: &str) -> WordPair {
    *VOCABULARY
        .iter()
        .find(|w| w.english == english)
        .expect("word in vocabulary")
}

/// Кот, Собака, Дом, Мышь in slots 0-3, the rest after them.
fn fixed_controller() -> MatchController {
    let state = MatchState {
        shuffled: VOCABULARY.to_vec(),
        ..MatchState::default()
    };
    MatchController::from_state(VOCABULARY.to_vec(), state, StdRng::seed_from_u64(1))
}

#[test]
fn tapping_correct_translation_records_match() {
    let mut game = fixed_controller();
    assert!(game.on_tile_tapped(&word("Кот"), Column::Russian));
    assert_eq!(game.state().selected_russian, Some("Кот"));

    // Slot 1 english column shows shuffled[0] on row 1.
    assert!(game.tap_slot(1, Column::English));
    assert_eq!(
        game.state().matched,
        vec![MatchedPair {
            russian: "Кот",
            english: "Cat",
            id: 1
        }]
    );
    assert_eq!(game.state().selected_russian, None);
}

#[test]
fn wrong_translation_keeps_selection_armed() {
    // Known quirk: a miss neither clears the selection nor reports anything.
    let mut game = fixed_controller();
    game.on_tile_tapped(&word("Кот"), Column::Russian);
    let changed = game.on_tile_tapped(&english("Dog"), Column::English);
    assert!(!changed);
    assert!(game.state().matched.is_empty());
    assert_eq!(game.state().selected_russian, Some("Кот"));
}

#[test]
fn english_tap_without_selection_is_noop() {
    let mut game = fixed_controller();
    let before = game.state().clone();
    assert!(!game.on_tile_tapped(&english("Cat"), Column::English));
    assert_eq!(game.state(), &before);
}

#[test]
fn last_russian_tap_wins() {
    let mut game = fixed_controller();
    game.on_tile_tapped(&word("Кот"), Column::Russian);
    game.on_tile_tapped(&word("Дом"), Column::Russian);
    assert_eq!(game.state().selected_russian, Some("Дом"));
    game.on_tile_tapped(&english("Cat"), Column::English);
    assert!(game.state().matched.is_empty());
    game.on_tile_tapped(&english("House"), Column::English);
    assert_eq!(game.state().matched.len(), 1);
    assert_eq!(game.state().matched[0].id, 3);
}

#[test]
fn matched_pair_can_be_rearmed_but_not_duplicated() {
    let mut game = fixed_controller();
    game.on_tile_tapped(&word("Кот"), Column::Russian);
    game.on_tile_tapped(&english("Cat"), Column::English);

    assert!(game.on_tile_tapped(&word("Кот"), Column::Russian));
    assert!(game.on_tile_tapped(&english("Cat"), Column::English));
    assert_eq!(game.state().matched.len(), 1);
    assert_eq!(game.state().selected_russian, None);
    assert!(game.is_tile_matched(&word("Кот")));
}

#[test]
fn matches_are_found_beyond_the_visible_slots() {
    // The lookup walks the whole shuffle, not just the four shown words.
    let mut game = fixed_controller();
    game.on_tile_tapped(&word("Понедельник"), Column::Russian);
    game.on_tile_tapped(&english("Monday"), Column::English);
    assert_eq!(game.state().matched[0].id, 12);
}

#[test]
fn is_tile_matched_uses_joint_check() {
    let mut game = fixed_controller();
    game.on_tile_tapped(&word("Кот"), Column::Russian);
    game.on_tile_tapped(&english("Cat"), Column::English);
    assert!(game.is_tile_matched(&word("Кот")));
    assert!(!game.is_tile_matched(&word("Собака")));
    assert!(!game.is_tile_matched(&WordPair::new(1, "Кот", "Dog")));
}

#[test]
fn restart_always_resets_and_counts_rounds() {
    let mut game = fixed_controller();
    game.on_tile_tapped(&word("Кот"), Column::Russian);
    game.on_tile_tapped(&english("Cat"), Column::English);
    game.on_tile_tapped(&word("Дом"), Column::Russian);

    game.restart();
    assert!(game.state().matched.is_empty());
    assert_eq!(game.state().selected_russian, None);
    assert_eq!(game.round(), 2);

    game.restart();
    game.restart();
    assert_eq!(game.round(), 4);
}

#[test]
fn restart_reshuffles_the_vocabulary() {
    let mut game = MatchController::new(Some(21));
    for _ in 0..5 {
        game.restart();
        let mut ids: Vec<u32> = game.state().shuffled.iter().map(|w| w.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }
}

#[test]
fn selection_only_set_between_russian_and_resolving_english_taps() {
    let mut game = MatchController::new(Some(99));
    let taps = [
        (0, Column::English),
        (0, Column::Russian),
        (0, Column::English),
        (1, Column::English),
        (2, Column::Russian),
        (0, Column::English),
        (3, Column::Russian),
        (3, Column::English),
    ];
    for (row, column) in taps {
        let before = game.state().selected_russian;
        game.tap_slot(row, column);
        let after = game.state().selected_russian;
        match column {
            Column::Russian => {
                let shown = game.board().tile(row, column).map(|t| t.word.russian);
                assert_eq!(after, shown);
            }
            Column::English => {
                assert!(after.is_none() || after == before);
            }
        }
    }
}

#[test]
fn short_vocabulary_empty_slot_is_silent() {
    let pairs = VOCABULARY[..2].to_vec();
    let mut game = MatchController::with_vocabulary(pairs, StdRng::seed_from_u64(4));
    let notified = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&notified);
    game.subscribe(move |_| *counter.borrow_mut() += 1);

    // Row 1 russian is slot 2, past the end of a two-word shuffle.
    assert!(!game.tap_slot(1, Column::Russian));
    assert!(!game.tap_slot(7, Column::Russian));
    assert_eq!(*notified.borrow(), 0);
    assert!(game.board().tile(1, Column::Russian).is_none());
}

#[test]
fn observers_receive_new_state() {
    let mut game = fixed_controller();
    let seen: Rc<RefCell<Vec<MatchState>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    game.subscribe(move |state| sink.borrow_mut().push(state.clone()));

    game.on_tile_tapped(&word("Кот"), Column::Russian);
    game.on_tile_tapped(&english("Dog"), Column::English);
    game.on_tile_tapped(&english("Cat"), Column::English);
    game.restart();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].selected_russian, Some("Кот"));
    assert_eq!(seen[1].matched.len(), 1);
    assert_eq!(seen[2].round, 2);
}
