use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::services::{GameRegistry, PlayerRegistry};

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<PlayerRegistry>,
    pub games: Arc<GameRegistry>,
}

impl AppState {
    /// Build the registries described by `config` and register its initial players.
    pub fn new(config: &ServerConfig) -> Result<Self, AppError> {
        let players = Arc::new(PlayerRegistry::new(config.chat_colors.clone())?);
        players.register_initial(&config.initial_player_names)?;
        let games = Arc::new(GameRegistry::new(
            Arc::clone(&players),
            config.chat_log_size,
            config.action_log_size,
        ));

        Ok(Self { players, games })
    }
}
