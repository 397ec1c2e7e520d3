//! Card identities and what a holder can infer about their own cards.

use serde::Serialize;

/// True identity of a card: a suit color and a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub color: String,
    pub index: u8,
}

impl Card {
    pub fn new(color: impl Into<String>, index: u8) -> Self {
        Self {
            color: color.into(),
            index,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.index)
    }
}

/// The colors and indices a card could still be, as known to its holder.
///
/// Starts as "anything the ruleset allows" and only ever narrows as hints
/// arrive. Order of the remaining possibilities follows the ruleset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferredCard {
    pub possible_colors: Vec<String>,
    pub possible_indices: Vec<u8>,
}

impl InferredCard {
    pub fn new(possible_colors: Vec<String>, possible_indices: Vec<u8>) -> Self {
        Self {
            possible_colors,
            possible_indices,
        }
    }

    /// Narrow after the holder is told which of their cards are `hinted`.
    pub fn after_color_hint(&self, card: &Card, hinted: &str) -> Self {
        let possible_colors = if card.color == hinted {
            vec![hinted.to_string()]
        } else {
            self.possible_colors
                .iter()
                .filter(|color| color.as_str() != hinted)
                .cloned()
                .collect()
        };
        Self {
            possible_colors,
            possible_indices: self.possible_indices.clone(),
        }
    }

    /// Narrow after the holder is told which of their cards carry `hinted`.
    pub fn after_index_hint(&self, card: &Card, hinted: u8) -> Self {
        let possible_indices = if card.index == hinted {
            vec![hinted]
        } else {
            self.possible_indices
                .iter()
                .copied()
                .filter(|index| *index != hinted)
                .collect()
        };
        Self {
            possible_colors: self.possible_colors.clone(),
            possible_indices,
        }
    }
}

/// A card in a player's hand together with the holder's knowledge of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldCard {
    pub card: Card,
    pub knowledge: InferredCard,
}
