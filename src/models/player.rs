//! Player model — a tournament participant.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PairId;

/// Numeric player identifier, unique within one tournament.
pub type PlayerId = u32;

/// Preferred court side for doubles play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Plays the right (deuce) side.
    Right,
    /// Plays the left (advantage) side.
    Left,
    /// Happy on either side.
    Either,
}

impl Position {
    /// Whether this is a fixed side (not [`Position::Either`]).
    pub fn is_fixed(&self) -> bool {
        !matches!(self, Position::Either)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Right => write!(f, "right"),
            Position::Left => write!(f, "left"),
            Position::Either => write!(f, "either"),
        }
    }
}

/// A tournament participant.
///
/// Created at configuration time and immutable during round generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier
    pub id: PlayerId,

    /// Display name, unique (case-insensitive) across the tournament
    pub name: String,

    /// Preferred court side
    pub position: Position,

    /// Fixed pair this player belongs to, if any (fixed-pairs mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair_id: Option<PairId>,
}

impl Player {
    /// Create a free player (no fixed pair).
    pub fn new(id: PlayerId, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            pair_id: None,
        }
    }

    /// Create a player bound to a fixed pair.
    pub fn with_pair(id: PlayerId, name: impl Into<String>, position: Position, pair_id: PairId) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            pair_id: Some(pair_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_fixed() {
        assert!(Position::Right.is_fixed());
        assert!(Position::Left.is_fixed());
        assert!(!Position::Either.is_fixed());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::Right), "right");
        assert_eq!(format!("{}", Position::Left), "left");
        assert_eq!(format!("{}", Position::Either), "either");
    }

    #[test]
    fn test_position_serialization() {
        let json = serde_json::to_string(&Position::Either).unwrap();
        assert_eq!(json, "\"either\"");

        let parsed: Position = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(parsed, Position::Left);
    }

    #[test]
    fn test_player_creation() {
        let player = Player::new(1, "Ana", Position::Right);
        assert_eq!(player.id, 1);
        assert_eq!(player.name, "Ana");
        assert_eq!(player.position, Position::Right);
        assert!(player.pair_id.is_none());
    }

    #[test]
    fn test_player_with_pair() {
        let player = Player::with_pair(3, "Luis", Position::Either, 2);
        assert_eq!(player.pair_id, Some(2));
    }

    #[test]
    fn test_player_serialization_skips_empty_pair() {
        let free = Player::new(1, "Ana", Position::Right);
        let json = serde_json::to_string(&free).unwrap();
        assert!(!json.contains("pair_id"));

        let paired = Player::with_pair(2, "Luis", Position::Left, 1);
        let json = serde_json::to_string(&paired).unwrap();
        let parsed: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, paired);
    }
}
