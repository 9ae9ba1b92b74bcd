//! Diagnostics: which games the final order contradicts, and by how much.

use std::collections::HashMap;

use rank_core::{Competitor, Game, GameSide, InconsistentGame, Order};

/// Per-competitor inconsistency score and the detailed list of violating
/// games. Each violation is charged to *both* sides — intentional, and part
/// of the contract: a single inconsistent game doubles the total score.
pub fn inconsistency_report(
    order: &Order,
    games: &[Game],
    alpha: u32,
) -> (HashMap<Competitor, i64>, HashMap<Competitor, Vec<InconsistentGame>>) {
    let mut scores: HashMap<Competitor, i64> = order.iter().cloned().map(|c| (c, 0)).collect();
    let mut details: HashMap<Competitor, Vec<InconsistentGame>> =
        order.iter().cloned().map(|c| (c, Vec::new())).collect();

    for game in games {
        let winner_idx = order.position_unchecked(&game.winner);
        let loser_idx = order.position_unchecked(&game.loser);

        if winner_idx > loser_idx {
            let magnitude = (winner_idx - loser_idx) as u64;
            let contribution = alpha as i64 + magnitude as i64;

            *scores.get_mut(&game.winner).expect("winner present") += contribution;
            *scores.get_mut(&game.loser).expect("loser present") += contribution;

            details.get_mut(&game.winner).expect("winner present").push(InconsistentGame {
                side: GameSide::Win,
                opponent: game.loser.clone(),
                magnitude,
            });
            details.get_mut(&game.loser).expect("loser present").push(InconsistentGame {
                side: GameSide::Loss,
                opponent: game.winner.clone(),
                magnitude,
            });
        }
    }

    (scores, details)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(names: &[&str]) -> Order {
        Order::new(names.iter().map(|&s| Competitor::new(s)).collect())
    }

    #[test]
    fn violation_is_charged_to_both_sides() {
        let o = order(&["a", "b"]);
        let games = vec![Game::new("b", "a")]; // b beat a but a is ranked ahead
        let (scores, details) = inconsistency_report(&o, &games, 1);
        assert_eq!(scores[&Competitor::new("a")], 2); // alpha(1) + magnitude(1)
        assert_eq!(scores[&Competitor::new("b")], 2);
        assert_eq!(details[&Competitor::new("a")].len(), 1);
        assert_eq!(details[&Competitor::new("b")].len(), 1);
        assert_eq!(details[&Competitor::new("a")][0].side, GameSide::Loss);
        assert_eq!(details[&Competitor::new("b")][0].side, GameSide::Win);
    }

    #[test]
    fn consistent_games_leave_scores_at_zero() {
        let o = order(&["a", "b"]);
        let games = vec![Game::new("a", "b")];
        let (scores, details) = inconsistency_report(&o, &games, 1);
        assert_eq!(scores[&Competitor::new("a")], 0);
        assert_eq!(scores[&Competitor::new("b")], 0);
        assert!(details[&Competitor::new("a")].is_empty());
    }
}
