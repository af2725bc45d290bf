//! Match model — a generated fixture between two sides of two players.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Player;

/// Errors from score entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("No match with number {0}")]
    MatchNotFound(u32),
}

/// One side of a match: two players partnering for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub players: [Player; 2],
}

impl Side {
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            players: [first, second],
        }
    }

    /// Member names joined for display, e.g. "Ana, Luis".
    pub fn label(&self) -> String {
        format!("{}, {}", self.players[0].name, self.players[1].name)
    }

    /// Whether the given player id is on this side.
    pub fn contains(&self, player_id: u32) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }
}

/// A recorded result for one match. Both numbers are set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    /// Points scored by side 1
    pub side1: u32,

    /// Points scored by side 2
    pub side2: u32,
}

/// A generated fixture.
///
/// Sides are fixed at creation; only the score may change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Global 1-based match number, unique across the tournament
    pub number: u32,

    /// 1-based round number
    pub round: u32,

    /// First side
    pub side1: Side,

    /// Second side
    pub side2: Side,

    /// Result, once entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<MatchScore>,
}

impl Match {
    pub fn new(number: u32, round: u32, side1: Side, side2: Side) -> Self {
        Self {
            number,
            round,
            side1,
            side2,
            score: None,
        }
    }
}

/// Set the score of the match with the given global number.
///
/// Idempotent: re-applying the same score leaves the list unchanged. An
/// unknown match number is a declared failure rather than a silent no-op,
/// since it almost always indicates a caller bug.
pub fn update_score(
    matches: &mut [Match],
    number: u32,
    score: MatchScore,
) -> Result<(), ScoreError> {
    let m = matches
        .iter_mut()
        .find(|m| m.number == number)
        .ok_or(ScoreError::MatchNotFound(number))?;
    m.score = Some(score);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, Position};

    fn sample_match(number: u32) -> Match {
        Match::new(
            number,
            1,
            Side::new(
                Player::new(1, "Ana", Position::Right),
                Player::new(2, "Luis", Position::Left),
            ),
            Side::new(
                Player::new(3, "Eva", Position::Right),
                Player::new(4, "Juan", Position::Left),
            ),
        )
    }

    #[test]
    fn test_side_label_and_contains() {
        let m = sample_match(1);
        assert_eq!(m.side1.label(), "Ana, Luis");
        assert!(m.side1.contains(2));
        assert!(!m.side1.contains(3));
    }

    #[test]
    fn test_update_score() {
        let mut matches = vec![sample_match(1), sample_match(2)];
        update_score(&mut matches, 2, MatchScore { side1: 6, side2: 4 }).unwrap();

        assert_eq!(matches[0].score, None);
        assert_eq!(matches[1].score, Some(MatchScore { side1: 6, side2: 4 }));
    }

    #[test]
    fn test_update_score_idempotent() {
        let mut matches = vec![sample_match(1)];
        let score = MatchScore { side1: 6, side2: 3 };

        update_score(&mut matches, 1, score).unwrap();
        let after_first = matches.clone();
        update_score(&mut matches, 1, score).unwrap();

        assert_eq!(matches, after_first);
    }

    #[test]
    fn test_update_score_unknown_number() {
        let mut matches = vec![sample_match(1)];
        let result = update_score(&mut matches, 99, MatchScore { side1: 1, side2: 0 });
        assert_eq!(result, Err(ScoreError::MatchNotFound(99)));
    }

    #[test]
    fn test_match_serialization_skips_missing_score() {
        let m = sample_match(1);
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("score"));

        let parsed: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn test_match_serialization_with_score() {
        let mut m = sample_match(1);
        m.score = Some(MatchScore { side1: 6, side2: 4 });

        let json = serde_json::to_string(&m).unwrap();
        let parsed: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.score, Some(MatchScore { side1: 6, side2: 4 }));
    }
}
