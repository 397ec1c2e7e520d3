//! Rulesets: which cards exist and the constants every ruleset shares.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::domain::cards::{Card, InferredCard};
use crate::errors::domain::{DomainError, ValidationKind};

pub const PLAYER_COUNT: RangeInclusive<usize> = 2..=5;
pub const MAXIMUM_NUMBER_OF_HINTS: u8 = 8;
/// The mistake that ends the game.
pub const NUMBER_OF_MISTAKES_ENDING_GAME: u8 = 3;
pub const HIGHEST_INDEX: u8 = 5;

const STANDARD_COLORS: [&str; 5] = ["red", "green", "blue", "yellow", "white"];
const RAINBOW: &str = "rainbow";
const STANDARD_INDICES: [u8; 10] = [1, 1, 1, 2, 2, 3, 3, 4, 4, 5];
const RAINBOW_INDICES: [u8; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Ruleset {
    Standard,
    RainbowAsSeparateSuit,
}

impl Ruleset {
    pub const ALL: [Ruleset; 2] = [Ruleset::Standard, Ruleset::RainbowAsSeparateSuit];

    /// Stable numeric identifier used by clients when creating games.
    pub fn identifier(self) -> u32 {
        match self {
            Ruleset::Standard => 1,
            Ruleset::RainbowAsSeparateSuit => 2,
        }
    }

    pub fn from_identifier(identifier: u32) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|ruleset| ruleset.identifier() == identifier)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidRuleset,
                    format!("Ruleset identifier {identifier} is not valid"),
                )
            })
    }

    pub fn description(self) -> &'static str {
        match self {
            Ruleset::Standard => "standard (without rainbow cards)",
            Ruleset::RainbowAsSeparateSuit => "with rainbow cards as separate suit",
        }
    }

    pub fn colors(self) -> Vec<String> {
        let mut colors: Vec<String> = STANDARD_COLORS.iter().map(|c| c.to_string()).collect();
        if self == Ruleset::RainbowAsSeparateSuit {
            colors.push(RAINBOW.to_string());
        }
        colors
    }

    /// Distinct indices a card can carry, ascending.
    pub fn distinct_indices(self) -> Vec<u8> {
        (1..=HIGHEST_INDEX).collect()
    }

    pub fn is_valid_color(self, color: &str) -> bool {
        self.colors().iter().any(|c| c == color)
    }

    pub fn is_valid_index(self, index: u8) -> bool {
        (1..=HIGHEST_INDEX).contains(&index)
    }

    /// Every card in the ruleset, grouped by color in ruleset order.
    pub fn full_cardset(self) -> Vec<Card> {
        let mut cards = Vec::new();
        for color in STANDARD_COLORS {
            cards.extend(STANDARD_INDICES.iter().map(|&index| Card::new(color, index)));
        }
        if self == Ruleset::RainbowAsSeparateSuit {
            cards.extend(RAINBOW_INDICES.iter().map(|&index| Card::new(RAINBOW, index)));
        }
        cards
    }

    /// Knowledge of a freshly drawn card: anything is possible.
    pub fn unknown_card(self) -> InferredCard {
        InferredCard::new(self.colors(), self.distinct_indices())
    }

    pub fn hand_size(self, number_of_players: usize) -> usize {
        if number_of_players <= 3 {
            5
        } else {
            4
        }
    }

    pub fn minimum_number_of_players(self) -> usize {
        *PLAYER_COUNT.start()
    }

    pub fn maximum_number_of_players(self) -> usize {
        *PLAYER_COUNT.end()
    }

    /// Points scored for correctly playing `card`.
    pub fn points_for_card(self, _card: &Card) -> u32 {
        1
    }
}
