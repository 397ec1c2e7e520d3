pub mod games;
pub mod players;

pub use games::{GameAction, GameRegistry, SharedGame, TurnSummary};
pub use players::{Player, PlayerRegistry};
