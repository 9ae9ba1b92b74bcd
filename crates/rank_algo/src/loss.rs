//! The loss function the annealer and slider minimize.

use std::collections::HashMap;

use rank_core::{Competitor, Game, Order};

use crate::sos::compute_sos;

/// Sum, over every game that the order contradicts, of `alpha + magnitude`
/// where `magnitude = pos[winner] - pos[loser]`. Consistent games contribute
/// nothing; no game contributes a negative amount.
pub fn primary_inconsistency_loss(order: &Order, games: &[Game], alpha: u32) -> i64 {
    let mut loss = 0i64;
    for game in games {
        let winner_idx = order.position_unchecked(&game.winner);
        let loser_idx = order.position_unchecked(&game.loser);
        if winner_idx > loser_idx {
            loss += alpha as i64 + (winner_idx - loser_idx) as i64;
        }
    }
    loss
}

/// Total loss: the primary inconsistency loss plus, when `include_sos` is
/// true and there is more than one competitor, a bounded strength-of-schedule
/// tie-breaker whose magnitude is strictly less than 1 whenever every
/// `SOS_norm` value lies in `[-1, 1]`.
pub fn total_loss(order: &Order, games: &[Game], alpha: u32, k: f64, lambda: f64, epsilon: f64, include_sos: bool) -> f64 {
    let n = order.len();
    let primary = primary_inconsistency_loss(order, games, alpha) as f64;

    if !include_sos || n <= 1 {
        return primary;
    }

    let sos_norm = compute_sos(order, games, k, lambda, epsilon);
    primary + tie_breaker_term(&sos_norm, order)
}

/// `epsilon_coeff * Σ SOS_norm[order[i]] * (i + 1)`, with
/// `epsilon_coeff = 2 / (n * (n + 1))`. The weights `1..=n` sum to
/// `n * (n + 1) / 2`, so whenever every `SOS_norm` value lies in `[-1, 1]`
/// this term's magnitude is bounded by exactly 1, with equality only in the
/// degenerate case where every value sits at the same extreme.
fn tie_breaker_term(sos_norm: &HashMap<Competitor, f64>, order: &Order) -> f64 {
    let n = order.len() as f64;
    let mut sos_penalty = 0.0;
    for (i, competitor) in order.iter().enumerate() {
        let rank = (i + 1) as f64;
        sos_penalty += sos_norm[competitor] * rank;
    }
    let epsilon_coeff = 2.0 / (n * (n + 1.0));
    epsilon_coeff * sos_penalty
}
