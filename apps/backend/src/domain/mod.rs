//! Domain layer: pure game logic types and helpers.

pub mod cards;
pub mod dealing;
pub mod game;
pub mod player_view;
pub mod rolling_log;
pub mod ruleset;
pub mod turn_order;

#[cfg(test)]
mod tests_player_view;
#[cfg(test)]
mod tests_props_rolling_log;
#[cfg(test)]
mod tests_props_turn_order;
#[cfg(test)]
mod tests_props_view_redaction;

// Re-exports for ergonomics
pub use cards::{Card, HeldCard, InferredCard};
pub use dealing::shuffled_deck;
pub use game::Game;
pub use player_view::{project, PlayerView, VisibleHand};
pub use rolling_log::{Message, RollingLog};
pub use ruleset::Ruleset;
pub use turn_order::{is_players_turn, rotate};
