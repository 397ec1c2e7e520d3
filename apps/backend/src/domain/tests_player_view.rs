//! Projection of a game for each participant.

use crate::domain::cards::Card;
use crate::domain::game::Game;
use crate::domain::player_view::project;
use crate::domain::ruleset::Ruleset;
use crate::errors::domain::DomainError;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}

fn color_of(name: &str) -> String {
    format!("{}-color", name.to_lowercase())
}

/// Three players; Carol alone holds the rainbow cards.
fn three_player_game() -> Game {
    let mut deck = Vec::new();
    for index in 1..=5 {
        deck.push(Card::new("red", index));
    }
    for index in 1..=5 {
        deck.push(Card::new("blue", index));
    }
    for index in 1..=5 {
        deck.push(Card::new("rainbow", index));
    }
    deck.extend(Ruleset::Standard.full_cardset().into_iter().take(10));
    Game::new(
        "view game",
        Ruleset::RainbowAsSeparateSuit,
        names(&["Alice", "Bob", "Carol"]),
        deck,
        8,
        8,
    )
    .unwrap()
}

#[test]
fn non_participants_get_no_view() {
    let game = three_player_game();
    let err = project(&game, "Nobody", color_of).unwrap_err();
    assert_eq!(
        err,
        DomainError::PlayerNotParticipant {
            player_name: "Nobody".into(),
            game_name: "view game".into(),
        }
    );
}

#[test]
fn others_are_split_around_the_viewer_in_turn_order() {
    let game = three_player_game();

    let alice = project(&game, "Alice", color_of).unwrap();
    assert_eq!(alice.turn_order, vec!["Alice", "Bob", "Carol"]);
    assert!(alice.is_players_turn);
    assert!(alice.this_player_can_take_turn);
    assert!(alice.hands_before_this_player.is_empty());
    let after: Vec<_> = alice
        .hands_after_this_player
        .iter()
        .map(|h| h.player_name.as_str())
        .collect();
    assert_eq!(after, vec!["Bob", "Carol"]);

    let carol = project(&game, "Carol", color_of).unwrap();
    assert!(!carol.is_players_turn);
    assert!(!carol.this_player_can_take_turn);
    let before: Vec<_> = carol
        .hands_before_this_player
        .iter()
        .map(|h| h.player_name.as_str())
        .collect();
    assert_eq!(before, vec!["Alice", "Bob"]);
    assert!(carol.hands_after_this_player.is_empty());
}

#[test]
fn rotation_follows_the_turn_counter() {
    let mut game = three_player_game();
    game.take_turn_by_discarding("Alice", "", 0).unwrap();

    let alice = project(&game, "Alice", color_of).unwrap();
    assert_eq!(alice.turn_number, 2);
    assert_eq!(alice.turn_order, vec!["Bob", "Carol", "Alice"]);
    let before: Vec<_> = alice
        .hands_before_this_player
        .iter()
        .map(|h| h.player_name.as_str())
        .collect();
    assert_eq!(before, vec!["Bob", "Carol"]);

    let bob = project(&game, "Bob", color_of).unwrap();
    assert!(bob.is_players_turn);
}

#[test]
fn other_hands_show_true_cards_and_registry_colors() {
    let game = three_player_game();
    let alice = project(&game, "Alice", color_of).unwrap();

    let carol = &alice.hands_after_this_player[1];
    assert_eq!(carol.player_color, "carol-color");
    let expected: Vec<_> = (1..=5).map(|i| Card::new("rainbow", i)).collect();
    assert_eq!(carol.hand_cards, expected);
    assert_eq!(carol.knowledge_of_own_hand.len(), 5);
}

#[test]
fn own_hand_is_only_inferred_knowledge() {
    let mut game = three_player_game();
    game.take_turn_by_hinting_color("Alice", "", "Carol", "rainbow").unwrap();

    let carol = project(&game, "Carol", color_of).unwrap();
    assert_eq!(carol.knowledge_of_own_hand.len(), 5);
    assert!(carol
        .knowledge_of_own_hand
        .iter()
        .all(|k| k.possible_colors == vec!["rainbow"] && k.possible_indices.len() == 5));

    // Nobody else holds rainbow cards, so their true identities can only leak
    // through Carol's own hand.
    let json = serde_json::to_string(&carol).unwrap();
    assert!(!json.contains(r#""color":"rainbow","index""#));
    assert!(!json.contains(r#""player_name":"Carol","player_color""#));
}

#[test]
fn logs_are_full_length_and_oldest_first() {
    let mut game = three_player_game();
    game.record_chat_message("Bob", "blue", "first").unwrap();
    game.record_chat_message("Carol", "green", "second").unwrap();
    game.take_turn_by_discarding("Alice", "pink", 0).unwrap();

    let view = project(&game, "Bob", color_of).unwrap();
    assert_eq!(view.chat_log.len(), 8);
    assert_eq!(view.chat_log[6].text, "first");
    assert_eq!(view.chat_log[7].text, "second");
    assert_eq!(view.action_log.len(), 8);
    assert_eq!(view.action_log[7].text, "discarded red 1");
}

#[test]
fn table_state_is_reported() {
    let mut game = three_player_game();
    game.take_turn_by_playing("Alice", "", 0).unwrap();
    game.take_turn_by_playing("Bob", "", 1).unwrap();
    game.take_turn_by_discarding("Carol", "", 0).unwrap();

    let view = project(&game, "Alice", color_of).unwrap();
    assert_eq!(view.ruleset_description, Ruleset::RainbowAsSeparateSuit.description());
    assert_eq!(view.score, 1);
    assert_eq!(view.number_of_mistakes_made, 1);
    assert_eq!(view.number_of_mistakes_ending_game, 3);
    assert_eq!(view.number_of_ready_hints, 8);
    assert_eq!(view.maximum_number_of_hints, 8);
    assert_eq!(view.number_of_cards_left_in_deck, 7);
    assert!(!view.game_is_finished);
    assert_eq!(view.played_cards.len(), 6);
    assert_eq!(view.played_cards[0].color, "red");
    assert_eq!(view.played_cards[0].cards, vec![Card::new("red", 1)]);
    // Discards sort by ruleset color order, so blue precedes rainbow.
    assert_eq!(
        view.discarded_cards,
        vec![Card::new("blue", 2), Card::new("rainbow", 1)]
    );
    assert_eq!(view.hint_colors.last().map(String::as_str), Some("rainbow"));
    assert_eq!(view.hint_indices, vec![1, 2, 3, 4, 5]);
}
