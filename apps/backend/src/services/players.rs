//! In-memory registry of players and their chat colors.

use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub chat_color: String,
}

/// Registered players keyed by name.
///
/// Players registered without a color are handed the configured colors in
/// round-robin order.
#[derive(Debug)]
pub struct PlayerRegistry {
    players: DashMap<String, Player>,
    colors: Vec<String>,
    defaults_handed_out: AtomicUsize,
}

impl PlayerRegistry {
    /// Registry offering `colors` (duplicates dropped, order kept).
    pub fn new(colors: Vec<String>) -> Result<Self, DomainError> {
        let mut unique: Vec<String> = Vec::with_capacity(colors.len());
        for color in colors {
            let color = color.trim().to_string();
            if !color.is_empty() && !unique.contains(&color) {
                unique.push(color);
            }
        }
        if unique.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidColor,
                "At least one chat color must be configured",
            ));
        }

        Ok(Self {
            players: DashMap::new(),
            colors: unique,
            defaults_handed_out: AtomicUsize::new(0),
        })
    }

    pub fn available_colors(&self) -> &[String] {
        &self.colors
    }

    pub fn register(&self, name: &str, color: Option<&str>) -> Result<Player, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                "Player name must not be empty",
            ));
        }
        // Names are looked up verbatim, so padding would make a player unreachable.
        if name.trim() != name {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                format!("Player name '{name}' must not start or end with whitespace"),
            ));
        }
        if let Some(color) = color {
            self.require_known_color(color)?;
        }

        match self.players.entry(name.to_string()) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::PlayerName,
                format!("Player {name} already exists"),
            )),
            Entry::Vacant(slot) => {
                let chat_color = match color {
                    Some(color) => color.to_string(),
                    None => {
                        let n = self.defaults_handed_out.fetch_add(1, Ordering::Relaxed);
                        self.colors[n % self.colors.len()].clone()
                    }
                };
                let player = Player {
                    name: name.to_string(),
                    chat_color,
                };
                slot.insert(player.clone());
                info!(player = %player.name, color = %player.chat_color, "Player registered");
                Ok(player)
            }
        }
    }

    /// Register each name not already present.
    pub fn register_initial(&self, names: &[String]) -> Result<(), DomainError> {
        for name in names {
            if self.players.contains_key(name.as_str()) {
                debug!(player = %name, "Initial player already registered");
                continue;
            }
            self.register(name, None)?;
        }
        Ok(())
    }

    pub fn update_color(&self, name: &str, color: &str) -> Result<Player, DomainError> {
        self.require_known_color(color)?;
        let mut player = self.players.get_mut(name).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {name} not found"))
        })?;
        player.chat_color = color.to_string();
        info!(player = %name, color = %color, "Player color updated");
        Ok(player.clone())
    }

    pub fn get(&self, name: &str) -> Option<Player> {
        self.players.get(name).map(|entry| entry.value().clone())
    }

    pub fn require(&self, name: &str) -> Result<Player, DomainError> {
        self.get(name).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {name} not found"))
        })
    }

    /// Chat color of `name`, empty for unknown players.
    pub fn color_of(&self, name: &str) -> String {
        self.players
            .get(name)
            .map(|entry| entry.chat_color.clone())
            .unwrap_or_default()
    }

    /// All players sorted by name.
    pub fn all(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.iter().map(|e| e.value().clone()).collect();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        players
    }

    fn require_known_color(&self, color: &str) -> Result<(), DomainError> {
        if self.colors.iter().any(|c| c == color) {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::InvalidColor,
                format!("{color} is not an available chat color"),
            ))
        }
    }
}
