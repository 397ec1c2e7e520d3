//! Registry of in-progress games.
//!
//! Each game sits behind its own lock so that unrelated games never contend.
//! The map itself is only touched long enough to clone a game's handle out;
//! no game lock is ever taken while a map shard is held, and cross-game reads
//! hold at most one game lock at a time.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::dealing::{random_seed, shuffled_deck};
use crate::domain::player_view::{project, PlayerView};
use crate::domain::rolling_log::DEFAULT_LOG_CAPACITY;
use crate::domain::{Game, Ruleset};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::extractors::name_segment::encode_segment;
use crate::services::players::PlayerRegistry;

pub type SharedGame = Arc<RwLock<Game>>;

/// A turn-taking action requested by the current player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    Discard { card_index: usize },
    Play { card_index: usize },
    HintColor { receiver: String, color: String },
    HintIndex { receiver: String, index: u8 },
}

impl GameAction {
    fn label(&self) -> &'static str {
        match self {
            GameAction::Discard { .. } => "discard",
            GameAction::Play { .. } => "play",
            GameAction::HintColor { .. } => "hint_color",
            GameAction::HintIndex { .. } => "hint_index",
        }
    }
}

/// One line of a player's game list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnSummary {
    pub game_name: String,
    pub game_identifier: String,
    pub ruleset_description: String,
    pub creation_timestamp: i64,
    pub turn_number: u32,
    pub player_names_in_next_turn_order: Vec<String>,
    pub is_player_turn: bool,
}

pub struct GameRegistry {
    games: DashMap<String, SharedGame>,
    players: Arc<PlayerRegistry>,
    chat_log_size: usize,
    action_log_size: usize,
}

impl GameRegistry {
    pub fn new(players: Arc<PlayerRegistry>, chat_log_size: usize, action_log_size: usize) -> Self {
        Self {
            games: DashMap::new(),
            players,
            chat_log_size,
            action_log_size,
        }
    }

    /// Registry with the default log sizes.
    pub fn with_default_logs(players: Arc<PlayerRegistry>) -> Self {
        Self::new(players, DEFAULT_LOG_CAPACITY, DEFAULT_LOG_CAPACITY)
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Create and deal a new game. `seed` fixes the shuffle; `None` draws one.
    pub fn create(
        &self,
        game_name: &str,
        ruleset_identifier: u32,
        player_names: Vec<String>,
        seed: Option<u64>,
    ) -> Result<(), DomainError> {
        let ruleset = Ruleset::from_identifier(ruleset_identifier)?;
        for name in &player_names {
            self.players.require(name)?;
        }
        if self.games.contains_key(game_name) {
            return Err(name_taken(game_name));
        }

        let seed = seed.unwrap_or_else(random_seed);
        let game = Game::new(
            game_name,
            ruleset,
            player_names,
            shuffled_deck(ruleset, seed),
            self.chat_log_size,
            self.action_log_size,
        )?;

        match self.games.entry(game_name.to_string()) {
            Entry::Occupied(_) => Err(name_taken(game_name)),
            Entry::Vacant(slot) => {
                info!(
                    game = %game_name,
                    ruleset = ruleset.identifier(),
                    players = ?game.participants(),
                    "Game created"
                );
                slot.insert(Arc::new(RwLock::new(game)));
                Ok(())
            }
        }
    }

    pub fn get(&self, game_name: &str) -> Result<SharedGame, DomainError> {
        self.games
            .get(game_name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Game, format!("Game {game_name} not found"))
            })
    }

    pub fn view(&self, game_name: &str, player_name: &str) -> Result<PlayerView, DomainError> {
        let shared = self.get(game_name)?;
        let game = shared.read();
        project(&game, player_name, |name| self.players.color_of(name))
    }

    /// Record chat under the game's shared lock; the log serializes writers.
    pub fn record_chat(
        &self,
        game_name: &str,
        player_name: &str,
        text: &str,
    ) -> Result<(), DomainError> {
        let shared = self.get(game_name)?;
        let color = self.players.color_of(player_name);
        shared.read().record_chat_message(player_name, &color, text)?;
        debug!(game = %game_name, player = %player_name, "Chat message recorded");
        Ok(())
    }

    pub fn perform(
        &self,
        game_name: &str,
        player_name: &str,
        action: GameAction,
    ) -> Result<(), DomainError> {
        let shared = self.get(game_name)?;
        let color = self.players.color_of(player_name);
        let label = action.label();

        let mut game = shared.write();
        if !game.has_participant(player_name) {
            return Err(DomainError::not_participant(player_name, game_name));
        }
        match action {
            GameAction::Discard { card_index } => {
                game.take_turn_by_discarding(player_name, &color, card_index)
            }
            GameAction::Play { card_index } => {
                game.take_turn_by_playing(player_name, &color, card_index)
            }
            GameAction::HintColor { receiver, color: hinted } => {
                game.take_turn_by_hinting_color(player_name, &color, &receiver, &hinted)
            }
            GameAction::HintIndex { receiver, index } => {
                game.take_turn_by_hinting_index(player_name, &color, &receiver, index)
            }
        }?;

        info!(
            game = %game_name,
            player = %player_name,
            action = label,
            turn = game.turn_number(),
            finished = game.is_finished(),
            "Turn taken"
        );
        Ok(())
    }

    /// Summaries of every game `player_name` takes part in, oldest game first.
    pub fn turn_summaries(&self, player_name: &str) -> Result<Vec<TurnSummary>, DomainError> {
        self.players.require(player_name)?;

        let handles: Vec<SharedGame> = self
            .games
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        let mut summaries: Vec<(time::OffsetDateTime, TurnSummary)> = handles
            .iter()
            .filter_map(|shared| {
                let game = shared.read();
                if !game.has_participant(player_name) {
                    return None;
                }
                let order = game.current_rotation();
                let is_player_turn = crate::domain::is_players_turn(&order, player_name);
                Some((
                    game.creation_time(),
                    TurnSummary {
                        game_name: game.name().to_string(),
                        game_identifier: encode_segment(game.name()),
                        ruleset_description: game.ruleset().description().to_string(),
                        creation_timestamp: game.creation_time().unix_timestamp(),
                        turn_number: game.turn_number(),
                        player_names_in_next_turn_order: order,
                        is_player_turn,
                    },
                ))
            })
            .collect();

        summaries.sort_by(|(a, a_summary), (b, b_summary)| {
            a.cmp(b).then_with(|| a_summary.game_name.cmp(&b_summary.game_name))
        });
        Ok(summaries.into_iter().map(|(_, summary)| summary).collect())
    }
}

fn name_taken(game_name: &str) -> DomainError {
    DomainError::conflict(
        ConflictKind::GameName,
        format!("A game named {game_name} already exists"),
    )
}
