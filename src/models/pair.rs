//! Fixed pair model — two players entering the tournament together.

use serde::{Deserialize, Serialize};

use super::Player;

/// Numeric pair identifier, unique within one tournament.
pub type PairId = u32;

/// A declared pair for fixed-pairs mode.
///
/// Invariant: exactly two members, bound by a shared pair id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// Unique identifier
    pub id: PairId,

    /// The two members
    pub players: [Player; 2],
}

impl Pair {
    pub fn new(id: PairId, first: Player, second: Player) -> Self {
        Self {
            id,
            players: [first, second],
        }
    }

    /// Member names joined for display, e.g. "Ana & Luis".
    pub fn label(&self) -> String {
        format!("{} & {}", self.players[0].name, self.players[1].name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    #[test]
    fn test_pair_creation() {
        let pair = Pair::new(
            1,
            Player::with_pair(1, "Ana", Position::Right, 1),
            Player::with_pair(2, "Luis", Position::Left, 1),
        );
        assert_eq!(pair.id, 1);
        assert_eq!(pair.players[0].name, "Ana");
        assert_eq!(pair.players[1].name, "Luis");
    }

    #[test]
    fn test_pair_label() {
        let pair = Pair::new(
            1,
            Player::with_pair(1, "Ana", Position::Right, 1),
            Player::with_pair(2, "Luis", Position::Left, 1),
        );
        assert_eq!(pair.label(), "Ana & Luis");
    }

    #[test]
    fn test_pair_serialization() {
        let pair = Pair::new(
            5,
            Player::with_pair(1, "Ana", Position::Right, 5),
            Player::with_pair(2, "Luis", Position::Left, 5),
        );
        let json = serde_json::to_string(&pair).unwrap();
        let parsed: Pair = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pair);
    }
}
