//! Free-mode scheduler.
//!
//! Greedy, round-by-round generation: each round repeatedly picks the best
//! group of four from the players still unused this round, then the best way
//! to split that group into two sides. The staged penalties encode the
//! priority order: avoid repeat partnerships, then repeat opponents, then
//! balance positions and play counts. A full combinatorial search over all
//! rounds would be intractable for realistic rosters; the candidate pool is
//! capped at 8 so group selection scores at most C(8,4) = 70 combinations.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{Match, Player, Position, Side};

/// Penalty for a side whose members have already partnered.
const REPEAT_PARTNER_PENALTY: u32 = 10_000;

/// Penalty per cross-side pair that has already met as opponents.
const REPEAT_OPPONENT_SPLIT_PENALTY: u32 = 1_000;

/// Penalty per pair within a candidate group that has already met as opponents.
const REPEAT_OPPONENT_GROUP_PENALTY: u32 = 100;

/// Weight on the play-count spread within a candidate group.
const PLAY_COUNT_SPREAD_WEIGHT: u32 = 5;

/// Group selection scores every 4-subset of at most this many candidates.
const CANDIDATE_POOL_SIZE: usize = 8;

/// Bookkeeping for one generation call, indexed by roster position.
struct FreeState {
    /// For each player, roster indices they have partnered with
    partners: Vec<HashSet<usize>>,

    /// For each player, roster indices they have faced
    opponents: Vec<HashSet<usize>>,

    /// Matches played so far per player
    played: Vec<u32>,
}

impl FreeState {
    fn new(roster_size: usize) -> Self {
        Self {
            partners: vec![HashSet::new(); roster_size],
            opponents: vec![HashSet::new(); roster_size],
            played: vec![0; roster_size],
        }
    }

    fn were_partners(&self, a: usize, b: usize) -> bool {
        self.partners[a].contains(&b)
    }

    fn were_opponents(&self, a: usize, b: usize) -> bool {
        self.opponents[a].contains(&b)
    }

    /// Record a committed match between sides (a1, a2) and (b1, b2).
    fn commit(&mut self, side1: [usize; 2], side2: [usize; 2]) {
        let [a1, a2] = side1;
        let [b1, b2] = side2;

        self.partners[a1].insert(a2);
        self.partners[a2].insert(a1);
        self.partners[b1].insert(b2);
        self.partners[b2].insert(b1);

        for &a in &side1 {
            for &b in &side2 {
                self.opponents[a].insert(b);
                self.opponents[b].insert(a);
            }
        }

        for idx in side1.into_iter().chain(side2) {
            self.played[idx] += 1;
        }
    }
}

/// Generate all rounds for the given roster. Inputs are assumed validated
/// (count a multiple of 4 and at least 8, rounds at least 1).
pub(super) fn generate(players: &[Player], rounds: u32) -> Vec<Match> {
    let matches_per_round = players.len() / 4;
    let mut state = FreeState::new(players.len());
    let mut matches = Vec::with_capacity(rounds as usize * matches_per_round);
    let mut number = 1;

    for round in 1..=rounds {
        let mut available: Vec<usize> = (0..players.len()).collect();

        for _ in 0..matches_per_round {
            let group = select_group(&available, players, &state);
            available.retain(|idx| !group.contains(idx));

            let (side1, side2) = best_split(&group, players, &state);
            state.commit(side1, side2);

            debug!(
                round,
                number,
                side1 = ?[&players[side1[0]].name, &players[side1[1]].name],
                side2 = ?[&players[side2[0]].name, &players[side2[1]].name],
                "Committed match"
            );

            matches.push(Match::new(
                number,
                round,
                Side::new(players[side1[0]].clone(), players[side1[1]].clone()),
                Side::new(players[side2[0]].clone(), players[side2[1]].clone()),
            ));
            number += 1;
        }
    }

    matches
}

/// Pick the four players that jointly minimize the group score.
///
/// Candidates are the available players with the fewest matches so far
/// (stable sort, so roster order breaks ties); every 4-subset of the pool is
/// scored and the first minimum wins. With four or fewer players left there
/// is nothing to choose.
fn select_group(available: &[usize], players: &[Player], state: &FreeState) -> Vec<usize> {
    let mut sorted: Vec<usize> = available.to_vec();
    sorted.sort_by_key(|&idx| state.played[idx]);

    if sorted.len() <= 4 {
        return sorted;
    }

    let candidates = &sorted[..CANDIDATE_POOL_SIZE.min(sorted.len())];

    let mut best: Option<(u32, Vec<usize>)> = None;
    for i in 0..candidates.len() - 3 {
        for j in i + 1..candidates.len() - 2 {
            for k in j + 1..candidates.len() - 1 {
                for l in k + 1..candidates.len() {
                    let group = [candidates[i], candidates[j], candidates[k], candidates[l]];
                    let score = group_score(&group, players, state);
                    if best.as_ref().map_or(true, |(s, _)| score < *s) {
                        best = Some((score, group.to_vec()));
                    }
                }
            }
        }
    }

    best.map(|(_, group)| group).unwrap_or_else(|| sorted[..4].to_vec())
}

/// Composite score for a candidate group of four. Lower is better.
fn group_score(group: &[usize; 4], players: &[Player], state: &FreeState) -> u32 {
    let mut score = position_balance(group, players);

    let max_played = group.iter().map(|&idx| state.played[idx]).max().unwrap_or(0);
    let min_played = group.iter().map(|&idx| state.played[idx]).min().unwrap_or(0);
    score += (max_played - min_played) * PLAY_COUNT_SPREAD_WEIGHT;

    let mut repeats = 0;
    for i in 0..group.len() {
        for j in i + 1..group.len() {
            if state.were_opponents(group[i], group[j]) {
                repeats += 1;
            }
        }
    }
    score += repeats * REPEAT_OPPONENT_GROUP_PENALTY;

    score
}

/// Position-balance penalty for a group of four.
///
/// Ideal is two right-side and two left-side players; flexible players make
/// uneven splits workable; three or four of the same fixed side leaves
/// someone out of position.
fn position_balance(group: &[usize; 4], players: &[Player]) -> u32 {
    let mut right = 0;
    let mut left = 0;
    let mut either = 0;
    for &idx in group {
        match players[idx].position {
            Position::Right => right += 1,
            Position::Left => left += 1,
            Position::Either => either += 1,
        }
    }

    if right == 4 || left == 4 {
        100
    } else if right == 3 || left == 3 {
        50
    } else if right == 2 && left == 2 {
        0
    } else if either >= 2 {
        5
    } else {
        20
    }
}

/// Evaluate the three ways to split a group of four into two opposing sides
/// and return the cheapest, first found winning ties.
fn best_split(group: &[usize], players: &[Player], state: &FreeState) -> ([usize; 2], [usize; 2]) {
    let (a, b, c, d) = (group[0], group[1], group[2], group[3]);
    let splits = [
        ([a, b], [c, d]),
        ([a, c], [b, d]),
        ([a, d], [b, c]),
    ];

    let mut best = splits[0];
    let mut lowest = u32::MAX;

    for split in splits {
        let (side1, side2) = split;
        let mut score = 0;

        if state.were_partners(side1[0], side1[1]) {
            score += REPEAT_PARTNER_PENALTY;
        }
        if state.were_partners(side2[0], side2[1]) {
            score += REPEAT_PARTNER_PENALTY;
        }

        for &x in &side1 {
            for &y in &side2 {
                if state.were_opponents(x, y) {
                    score += REPEAT_OPPONENT_SPLIT_PENALTY;
                }
            }
        }

        score += side_position_cost(&players[side1[0]], &players[side1[1]]);
        score += side_position_cost(&players[side2[0]], &players[side2[1]]);

        if score < lowest {
            lowest = score;
            best = split;
        }
    }

    best
}

/// Position-complementarity cost for two players sharing a side.
fn side_position_cost(first: &Player, second: &Player) -> u32 {
    match (first.position, second.position) {
        (Position::Right, Position::Left) | (Position::Left, Position::Right) => 0,
        (Position::Either, Position::Either) => 3,
        (Position::Either, _) | (_, Position::Either) => 5,
        (Position::Right, Position::Right) | (Position::Left, Position::Left) => 100,
    }
}
