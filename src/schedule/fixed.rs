//! Fixed-pairs scheduler.
//!
//! Pairs stay together for the whole tournament; scheduling only decides
//! which pairs meet each round. Leftover free players are combined
//! two-at-a-time, in roster order, into synthetic pairs.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{Match, Pair, PairId, Player, Side};

use super::ScheduleError;

/// Build the pair list from the roster: declared pairs first, in order of
/// first appearance, then free players combined pairwise in roster order.
/// A trailing unpaired free player joins no pair and sits out.
fn collect_pairs(players: &[Player]) -> Vec<Pair> {
    let mut declared: Vec<(PairId, Vec<&Player>)> = Vec::new();
    let mut free: Vec<&Player> = Vec::new();

    for player in players {
        match player.pair_id {
            Some(pair_id) => {
                if let Some((_, members)) = declared.iter_mut().find(|(id, _)| *id == pair_id) {
                    members.push(player);
                } else {
                    declared.push((pair_id, vec![player]));
                }
            }
            None => free.push(player),
        }
    }

    let mut pairs: Vec<Pair> = declared
        .into_iter()
        .filter(|(_, members)| members.len() == 2)
        .map(|(id, members)| Pair::new(id, members[0].to_owned(), members[1].to_owned()))
        .collect();

    let mut next_id = pairs.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    for chunk in free.chunks(2) {
        if let [first, second] = chunk {
            pairs.push(Pair::new(next_id, (*first).clone(), (*second).clone()));
            next_id += 1;
        }
    }

    pairs
}

/// Generate all rounds for a fixed-pairs tournament.
pub(super) fn generate(players: &[Player], rounds: u32) -> Result<Vec<Match>, ScheduleError> {
    let pairs = collect_pairs(players);

    if pairs.len() < 2 {
        return Err(ScheduleError::NotEnoughPairs(pairs.len()));
    }
    if pairs.len() % 2 != 0 {
        return Err(ScheduleError::OddPairCount(pairs.len()));
    }

    let matches_per_round = pairs.len() / 2;
    // Prior matchups between pairs, indexed by pair list position.
    let mut matchups: Vec<HashSet<usize>> = vec![HashSet::new(); pairs.len()];
    let mut matches = Vec::with_capacity(rounds as usize * matches_per_round);
    let mut number = 1;

    for round in 1..=rounds {
        let mut available: Vec<usize> = (0..pairs.len()).collect();

        for _ in 0..matches_per_round {
            if available.len() < 2 {
                break;
            }

            let (first, second) = pick_matchup(&available, &matchups);
            matchups[first].insert(second);
            matchups[second].insert(first);
            available.retain(|&idx| idx != first && idx != second);

            debug!(
                round,
                number,
                side1 = %pairs[first].label(),
                side2 = %pairs[second].label(),
                "Committed matchup"
            );

            let side1 = &pairs[first].players;
            let side2 = &pairs[second].players;
            matches.push(Match::new(
                number,
                round,
                Side::new(side1[0].clone(), side1[1].clone()),
                Side::new(side2[0].clone(), side2[1].clone()),
            ));
            number += 1;
        }
    }

    Ok(matches)
}

/// Among the available pairs, choose the combination that has not met
/// before with the lowest combined prior-matchup count, first found winning
/// ties. When every remaining combination has already met, fall back to the
/// first two in index order.
fn pick_matchup(available: &[usize], matchups: &[HashSet<usize>]) -> (usize, usize) {
    let mut best: Option<(usize, usize, usize)> = None;

    for i in 0..available.len() {
        for j in i + 1..available.len() {
            let (first, second) = (available[i], available[j]);
            if matchups[first].contains(&second) {
                continue;
            }

            let total = matchups[first].len() + matchups[second].len();
            if best.map_or(true, |(_, _, t)| total < t) {
                best = Some((first, second, total));
            }
        }
    }

    match best {
        Some((first, second, _)) => (first, second),
        None => (available[0], available[1]),
    }
}
