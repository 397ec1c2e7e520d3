//! Property tests for turn rotation.

use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::turn_order::{is_players_turn, rotate, split_around};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: rotation is a cyclic shift headed by participant (turn - 1) mod P
    #[test]
    fn prop_rotation_is_a_cyclic_shift(
        participants in test_gens::participants(1, 8),
        turn in 1u32..10_000,
    ) {
        let rotated = rotate(&participants, turn);
        let len = participants.len();
        let start = (turn as usize - 1) % len;
        prop_assert_eq!(rotated.len(), len);
        for (i, name) in rotated.iter().enumerate() {
            prop_assert_eq!(name, &participants[(start + i) % len]);
        }
    }

    /// Property: exactly one participant is up on any turn
    #[test]
    fn prop_exactly_one_player_is_up(
        participants in test_gens::participants(2, 5),
        turn in 1u32..500,
    ) {
        let rotated = rotate(&participants, turn);
        let up = participants
            .iter()
            .filter(|name| is_players_turn(&rotated, name))
            .count();
        prop_assert_eq!(up, 1);
        prop_assert!(!is_players_turn(&rotated, "not-a-participant"));
    }

    /// Property: advancing P turns returns to the same rotation
    #[test]
    fn prop_rotation_has_period_p(
        participants in test_gens::participants(2, 5),
        turn in 1u32..500,
    ) {
        let len = participants.len() as u32;
        prop_assert_eq!(rotate(&participants, turn), rotate(&participants, turn + len));
    }

    /// Property: the split around any participant covers everyone else once
    #[test]
    fn prop_split_covers_all_others(
        participants in test_gens::participants(2, 5),
        turn in 1u32..50,
        pick in any::<prop::sample::Index>(),
    ) {
        let rotated = rotate(&participants, turn);
        let viewer = pick.get(&participants);
        let (before, after) = split_around(&rotated, viewer).unwrap();
        prop_assert_eq!(before.len() + after.len() + 1, participants.len());
        prop_assert!(!before.contains(viewer) && !after.contains(viewer));
    }
}
