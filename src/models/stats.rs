//! Derived per-player statistics.

use serde::{Deserialize, Serialize};

use super::Player;

/// Standings entry for one player.
///
/// Recomputed from scratch from the current match list; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// The player these numbers belong to
    pub player: Player,

    /// Matches with an entered score this player took part in
    pub matches_played: u32,

    /// Matches won (strictly higher score; ties award no win)
    pub matches_won: u32,

    /// Points scored by this player's side
    pub points_for: u32,

    /// Points scored by the opposing side
    pub points_against: u32,

    /// points_for - points_against
    pub difference: i64,
}

impl PlayerStats {
    /// Zeroed statistics for a player with no scored matches.
    pub fn empty(player: Player) -> Self {
        Self {
            player,
            matches_played: 0,
            matches_won: 0,
            points_for: 0,
            points_against: 0,
            difference: 0,
        }
    }
}
