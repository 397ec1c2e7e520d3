//! Deterministic deck shuffling.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::cards::Card;
use crate::domain::ruleset::Ruleset;

/// The ruleset's full cardset shuffled by a ChaCha8 stream seeded with `seed`.
///
/// The same `(ruleset, seed)` pair always yields the same deck; the top of the
/// deck is the first element.
pub fn shuffled_deck(ruleset: Ruleset, seed: u64) -> Vec<Card> {
    let mut deck = ruleset.full_cardset();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// A fresh seed for games created without one.
pub fn random_seed() -> u64 {
    rand::random()
}
