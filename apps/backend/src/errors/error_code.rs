//! Error codes for the fireworks backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the fireworks backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Participation
    /// Player is not a participant of the game
    NotAMember,
    /// Acting player is not the player whose turn it is
    OutOfTurn,

    // Request Validation
    /// Identifier segment in the URI could not be decoded
    InvalidIdentifier,
    /// Player or game name missing or malformed
    InvalidName,
    /// Chat color not in the configured list
    InvalidColor,
    /// Ruleset identifier not known
    InvalidRuleset,
    /// Number of participants outside the ruleset's range
    InvalidPlayerCount,
    /// Participant listed more than once
    DuplicateParticipant,
    /// Card index outside the player's hand
    InvalidCardIndex,
    /// Hint refers to a color or number the ruleset does not offer
    InvalidHint,
    /// Hint given to oneself
    HintToSelf,
    /// Hint attempted with no hints available
    NoHintsAvailable,
    /// Action attempted on a finished game
    GameFinished,
    /// Rolling log requested with a capacity of zero
    InvalidCapacity,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// A game with this name already exists
    GameNameTaken,
    /// A player with this name already exists
    PlayerNameTaken,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotAMember => "NOT_A_MEMBER",
            Self::OutOfTurn => "OUT_OF_TURN",

            Self::InvalidIdentifier => "INVALID_IDENTIFIER",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidColor => "INVALID_COLOR",
            Self::InvalidRuleset => "INVALID_RULESET",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::DuplicateParticipant => "DUPLICATE_PARTICIPANT",
            Self::InvalidCardIndex => "INVALID_CARD_INDEX",
            Self::InvalidHint => "INVALID_HINT",
            Self::HintToSelf => "HINT_TO_SELF",
            Self::NoHintsAvailable => "NO_HINTS_AVAILABLE",
            Self::GameFinished => "GAME_FINISHED",
            Self::InvalidCapacity => "INVALID_CAPACITY",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameNameTaken => "GAME_NAME_TAKEN",
            Self::PlayerNameTaken => "PLAYER_NAME_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
