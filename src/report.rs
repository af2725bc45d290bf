//! Text summary rendering.
//!
//! Produces a fixed multi-line layout intended for copy/paste and share
//! links; callers may snapshot-test the exact text. No scheduling logic
//! lives here.

use std::collections::BTreeMap;

use crate::models::Match;

/// Render the round/match structure (and scores, where entered) as text.
///
/// Matches are grouped by round in ascending order; within a round they keep
/// match-number order.
pub fn render_summary(matches: &[Match]) -> String {
    let mut summary = String::from("🏓 AMERICANO PADEL 🏓\n\n");

    let mut by_round: BTreeMap<u32, Vec<&Match>> = BTreeMap::new();
    for m in matches {
        by_round.entry(m.round).or_default().push(m);
    }

    for (round, round_matches) in by_round {
        summary.push_str(&format!("━━━ ROUND {} ━━━\n", round));
        summary.push_str(&format!(
            "({} simultaneous match(es))\n\n",
            round_matches.len()
        ));

        for m in round_matches {
            summary.push_str(&format!(
                "Match {}: [{}] vs [{}]",
                m.number,
                m.side1.label(),
                m.side2.label()
            ));

            if let Some(score) = m.score {
                summary.push_str(&format!(" - {}:{}", score.side1, score.side2));
            }
            summary.push('\n');
        }

        summary.push('\n');
    }

    summary
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{MatchScore, Player, Position, Side};

    fn sample_matches() -> Vec<Match> {
        let player = |id: u32, name: &str| Player::new(id, name, Position::Either);
        let mut first = Match::new(
            1,
            1,
            Side::new(player(1, "Ana"), player(2, "Luis")),
            Side::new(player(3, "Eva"), player(4, "Juan")),
        );
        first.score = Some(MatchScore { side1: 6, side2: 4 });

        let second = Match::new(
            2,
            1,
            Side::new(player(5, "Marta"), player(6, "Pablo")),
            Side::new(player(7, "Sara"), player(8, "Diego")),
        );

        let third = Match::new(
            3,
            2,
            Side::new(player(1, "Ana"), player(3, "Eva")),
            Side::new(player(2, "Luis"), player(4, "Juan")),
        );

        vec![first, second, third]
    }

    #[test]
    fn test_summary_layout() {
        let expected = "\
🏓 AMERICANO PADEL 🏓

━━━ ROUND 1 ━━━
(2 simultaneous match(es))

Match 1: [Ana, Luis] vs [Eva, Juan] - 6:4
Match 2: [Marta, Pablo] vs [Sara, Diego]

━━━ ROUND 2 ━━━
(1 simultaneous match(es))

Match 3: [Ana, Eva] vs [Luis, Juan]

";
        assert_eq!(render_summary(&sample_matches()), expected);
    }

    #[test]
    fn test_rounds_sorted_ascending_regardless_of_input_order() {
        let mut matches = sample_matches();
        matches.reverse();

        let summary = render_summary(&matches);
        let round1_at = summary.find("ROUND 1").unwrap();
        let round2_at = summary.find("ROUND 2").unwrap();
        assert!(round1_at < round2_at);
    }

    #[test]
    fn test_empty_match_list() {
        assert_eq!(render_summary(&[]), "🏓 AMERICANO PADEL 🏓\n\n");
    }

    #[test]
    fn test_score_appended_only_when_entered() {
        let summary = render_summary(&sample_matches());
        assert!(summary.contains("Match 1: [Ana, Luis] vs [Eva, Juan] - 6:4"));
        assert!(summary.contains("Match 2: [Marta, Pablo] vs [Sara, Diego]\n"));
        assert!(!summary.contains("Match 2: [Marta, Pablo] vs [Sara, Diego] -"));
    }
}
