use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use fireworks::services::GameAction;
use fireworks::{GameRegistry, PlayerRegistry};

use crate::common::{names, COLORS, PLAYERS};

fn registry() -> GameRegistry {
    let players = PlayerRegistry::new(names(&COLORS)).unwrap();
    players.register_initial(&names(&PLAYERS)).unwrap();
    GameRegistry::with_default_logs(Arc::new(players))
}

#[test]
fn concurrent_registrations_share_colors_evenly() {
    let players = PlayerRegistry::new(names(&COLORS)).unwrap();

    thread::scope(|s| {
        for t in 0..6 {
            let players = &players;
            s.spawn(move || {
                for i in 0..5 {
                    players.register(&format!("P{t}x{i}"), None).unwrap();
                }
            });
        }
    });

    let mut per_color: HashMap<String, usize> = HashMap::new();
    for player in players.all() {
        *per_color.entry(player.chat_color).or_default() += 1;
    }
    assert_eq!(per_color.len(), 3);
    assert!(per_color.values().all(|&n| n == 10));
}

#[test]
fn chat_from_many_threads_keeps_the_newest_messages_in_order() {
    let games = registry();
    games
        .create("Busy", 1, names(&["Alice", "Bob", "Carol"]), Some(5))
        .unwrap();

    thread::scope(|s| {
        for t in 0..8 {
            let games = &games;
            s.spawn(move || {
                let speaker = ["Alice", "Bob", "Carol"][t % 3];
                for i in 0..25 {
                    games
                        .record_chat("Busy", speaker, &format!("{t}:{i}"))
                        .unwrap();
                }
            });
        }
    });

    let log = games.view("Busy", "Alice").unwrap().chat_log;
    assert_eq!(log.len(), 8);
    assert!(log.iter().all(|m| !m.is_empty()));
    assert!(log
        .windows(2)
        .all(|w| w[0].creation_time <= w[1].creation_time));
}

#[test]
fn separate_games_progress_independently() {
    let games = registry();
    for g in 0..4 {
        games
            .create(&format!("Game{g}"), 1, names(&["Alice", "Bob"]), Some(g))
            .unwrap();
    }

    thread::scope(|s| {
        for g in 0..4 {
            let games = &games;
            s.spawn(move || {
                let name = format!("Game{g}");
                for turn in 0..20 {
                    let actor = if turn % 2 == 0 { "Alice" } else { "Bob" };
                    games
                        .perform(&name, actor, GameAction::Discard { card_index: 0 })
                        .unwrap();
                }
            });
        }
        s.spawn(|| {
            for _ in 0..50 {
                let summaries = games.turn_summaries("Bob").unwrap();
                assert_eq!(summaries.len(), 4);
            }
        });
    });

    for g in 0..4 {
        let shared = games.get(&format!("Game{g}")).unwrap();
        let game = shared.read();
        assert_eq!(game.turn_number(), 21);
        assert_eq!(game.discarded().len(), 20);
        assert_eq!(game.ready_hints(), 8);
        assert!(!game.is_finished());
    }
}
