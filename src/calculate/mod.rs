//! Statistics calculation.
//!
//! Computes per-player standings from the current match list. Everything
//! here is a pure function recomputed from scratch on demand; nothing is
//! cached or persisted.

use std::collections::HashMap;

use crate::models::{Match, Player, PlayerId, PlayerStats};

/// Compute ranked standings for the roster.
///
/// Only matches with an entered score count; every scored match credits all
/// four participants with a played match and their side's points, and a win
/// to the side with the strictly higher score (ties award no win). Output is
/// sorted by matches won, then points difference, both descending; remaining
/// ties keep roster order.
pub fn player_statistics(matches: &[Match], roster: &[Player]) -> Vec<PlayerStats> {
    let mut by_id: HashMap<PlayerId, PlayerStats> = roster
        .iter()
        .map(|p| (p.id, PlayerStats::empty(p.clone())))
        .collect();

    for m in matches {
        let score = match m.score {
            Some(score) => score,
            None => continue,
        };

        let side1_won = score.side1 > score.side2;
        let side2_won = score.side2 > score.side1;

        for p in &m.side1.players {
            if let Some(stats) = by_id.get_mut(&p.id) {
                stats.matches_played += 1;
                stats.points_for += score.side1;
                stats.points_against += score.side2;
                if side1_won {
                    stats.matches_won += 1;
                }
            }
        }
        for p in &m.side2.players {
            if let Some(stats) = by_id.get_mut(&p.id) {
                stats.matches_played += 1;
                stats.points_for += score.side2;
                stats.points_against += score.side1;
                if side2_won {
                    stats.matches_won += 1;
                }
            }
        }
    }

    // Roster order first so the final sort is stably tie-broken by it.
    let mut standings: Vec<PlayerStats> = roster
        .iter()
        .filter_map(|p| by_id.remove(&p.id))
        .map(|mut stats| {
            stats.difference = i64::from(stats.points_for) - i64::from(stats.points_against);
            stats
        })
        .collect();

    standings.sort_by(|a, b| {
        b.matches_won
            .cmp(&a.matches_won)
            .then(b.difference.cmp(&a.difference))
    });

    standings
}
