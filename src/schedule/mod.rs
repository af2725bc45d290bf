//! Round generation engine.
//!
//! Two schedulers share the entity model and produce the same output shape:
//! - **free mode**: sides are re-formed every round from individual players,
//!   minimizing repeated partnerships and opponents and balancing court
//!   positions and play counts.
//! - **fixed-pairs mode**: declared pairs stay together and meet other pairs,
//!   minimizing repeat matchups.
//!
//! Generation is a pure function of the configuration: all bookkeeping
//! (partnership, opponent and matchup tables, play counts) lives in a state
//! value local to one call, so independent tournaments can be generated
//! concurrently.

use thiserror::Error;
use tracing::info;

use crate::config::{PairingMode, TournamentConfig};
use crate::models::Match;

mod fixed;
mod free;

/// Errors that abort a generation call. No partial match list is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Player count must be a multiple of 4 and at least 8, got {0}")]
    InvalidPlayerCount(usize),

    #[error("There must be at least 1 round, got {0}")]
    InvalidRoundCount(u32),

    #[error("At least 2 pairs are needed to schedule matches, got {0}")]
    NotEnoughPairs(usize),

    #[error("Pair count must be even to fill a round, got {0}")]
    OddPairCount(usize),
}

/// Generate the full match list for a tournament.
///
/// Deterministic: identical configurations produce identical output. The
/// count and round invariants are re-checked here even though
/// [`TournamentConfig`] validates them, since the engine must not trust its
/// caller to have done so.
pub fn generate(config: &TournamentConfig) -> Result<Vec<Match>, ScheduleError> {
    if config.players.len() < 8 || config.players.len() % 4 != 0 {
        return Err(ScheduleError::InvalidPlayerCount(config.players.len()));
    }
    if config.rounds < 1 {
        return Err(ScheduleError::InvalidRoundCount(config.rounds));
    }

    let matches = match config.mode {
        PairingMode::Free => free::generate(&config.players, config.rounds),
        PairingMode::FixedPairs => fixed::generate(&config.players, config.rounds)?,
    };

    info!(
        mode = ?config.mode,
        rounds = config.rounds,
        matches = matches.len(),
        "Generated tournament schedule"
    );

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, Position};

    fn roster(count: u32) -> Vec<Player> {
        (1..=count)
            .map(|i| Player::new(i, format!("Player {}", i), Position::Either))
            .collect()
    }

    fn config(rounds: u32, mode: PairingMode, players: Vec<Player>) -> TournamentConfig {
        TournamentConfig {
            rounds,
            mode,
            players,
        }
    }

    #[test]
    fn test_generate_rejects_bad_player_count() {
        let result = generate(&config(1, PairingMode::Free, roster(6)));
        assert_eq!(result, Err(ScheduleError::InvalidPlayerCount(6)));

        let result = generate(&config(1, PairingMode::Free, roster(10)));
        assert_eq!(result, Err(ScheduleError::InvalidPlayerCount(10)));
    }

    #[test]
    fn test_generate_rejects_zero_rounds() {
        let result = generate(&config(0, PairingMode::Free, roster(8)));
        assert_eq!(result, Err(ScheduleError::InvalidRoundCount(0)));
    }

    #[test]
    fn test_generate_free_mode_shape() {
        let matches = generate(&config(3, PairingMode::Free, roster(8))).unwrap();
        assert_eq!(matches.len(), 6);

        let numbers: Vec<u32> = matches.iter().map(|m| m.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let cfg = config(4, PairingMode::Free, roster(12));
        assert_eq!(generate(&cfg).unwrap(), generate(&cfg).unwrap());
    }
}
