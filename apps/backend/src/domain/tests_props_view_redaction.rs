//! Property tests for view redaction.
//!
//! Properties tested:
//! - The viewer never appears among the visible hands
//! - Every other participant's hand is shown with its true cards
//! - The viewer's own hand appears only as the knowledge they hold
//! - All of the above hold after arbitrary discards, plays and hints

use proptest::prelude::*;

use crate::domain::game::Game;
use crate::domain::player_view::project;
use crate::domain::test_gens;
use crate::domain::test_prelude;

fn true_cards(game: &Game, player: &str) -> Vec<crate::domain::Card> {
    game.hand_of(player)
        .unwrap()
        .iter()
        .map(|held| held.card.clone())
        .collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_views_reveal_others_and_redact_self(
        game in test_gens::played_game(),
        pick in any::<prop::sample::Index>(),
    ) {
        let participants = game.participants().to_vec();
        let viewer = pick.get(&participants);
        let view = project(&game, viewer, |_| String::new()).unwrap();

        let visible: Vec<_> = view
            .hands_before_this_player
            .iter()
            .chain(view.hands_after_this_player.iter())
            .collect();
        prop_assert_eq!(visible.len(), participants.len() - 1);
        for hand in &visible {
            prop_assert_ne!(&hand.player_name, viewer);
            prop_assert_eq!(&hand.hand_cards, &true_cards(&game, &hand.player_name));
        }

        prop_assert_eq!(
            Some(view.knowledge_of_own_hand.clone()),
            game.knowledge_of_own_hand(viewer)
        );
        prop_assert_eq!(view.knowledge_of_own_hand.len(), true_cards(&game, viewer).len());
    }

    #[test]
    fn prop_hinted_knowledge_still_covers_the_true_card(game in test_gens::played_game()) {
        for player in game.participants() {
            for held in game.hand_of(player).unwrap() {
                prop_assert!(held.knowledge.possible_colors.contains(&held.card.color));
                prop_assert!(held.knowledge.possible_indices.contains(&held.card.index));
            }
        }
    }

    #[test]
    fn prop_strangers_are_rejected(game in test_gens::fresh_game()) {
        prop_assert!(project(&game, "nobody at all", |_| String::new()).is_err());
    }
}
