//! Property tests for the rolling log.
//!
//! Properties tested:
//! - Snapshots always hold exactly `capacity` entries
//! - Short logs are padded at the front with empty messages
//! - Full logs hold the most recent `capacity` appends, oldest first

use proptest::prelude::*;

use crate::domain::rolling_log::{Message, RollingLog};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_snapshot_keeps_the_last_appends_in_order(
        capacity in 1usize..16,
        texts in prop::collection::vec("[a-z]{0,6}", 0..40),
    ) {
        let log = RollingLog::<Message>::new(capacity).unwrap();
        for (i, text) in texts.iter().enumerate() {
            log.append(format!("p{i}"), "c", text.clone());
        }

        let snapshot = log.snapshot();
        prop_assert_eq!(snapshot.len(), capacity);

        let kept = texts.len().min(capacity);
        let padding = capacity - kept;
        prop_assert!(snapshot[..padding].iter().all(Message::is_empty));

        let expected = &texts[texts.len() - kept..];
        for (offset, message) in snapshot[padding..].iter().enumerate() {
            let original = texts.len() - kept + offset;
            prop_assert_eq!(&message.text, &expected[offset]);
            prop_assert_eq!(&message.player_name, &format!("p{original}"));
        }
    }

    #[test]
    fn prop_generic_log_matches_a_sliding_window(
        capacity in 1usize..10,
        values in prop::collection::vec(1u32..1000, 0..30),
    ) {
        let log = RollingLog::<u32>::new(capacity).unwrap();
        for value in &values {
            log.push(*value);
        }

        let mut expected = vec![0u32; capacity.saturating_sub(values.len())];
        expected.extend(values.iter().skip(values.len().saturating_sub(capacity)));
        prop_assert_eq!(log.snapshot(), expected);
    }
}
