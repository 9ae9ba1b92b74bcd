//! Strength-of-schedule: a bounded per-competitor tie-breaker.
//!
//! Only games that are *consistent* with the current order are counted here
//! — inconsistent games already drive the primary loss, so including them
//! again would double-count the same evidence.

use std::collections::HashMap;

use rank_core::{Competitor, Game, Order};

/// Per-competitor normalized strength-of-schedule, `SOS_norm[c] = lambda *
/// Q_win[c] / (Q_max_win + epsilon) - (1 - lambda) * Q_loss[c] / (Q_max_loss + epsilon)`.
pub fn compute_sos(order: &Order, games: &[Game], k: f64, lambda: f64, epsilon: f64) -> HashMap<Competitor, f64> {
    let n = order.len() as f64;

    let mut q_win: HashMap<Competitor, f64> = order.iter().cloned().map(|c| (c, 0.0)).collect();
    let mut q_loss: HashMap<Competitor, f64> = order.iter().cloned().map(|c| (c, 0.0)).collect();

    for game in games {
        let winner_rank = (order.position_unchecked(&game.winner) + 1) as f64;
        let loser_rank = (order.position_unchecked(&game.loser) + 1) as f64;

        // Only a consistent game (winner ranked ahead of loser) contributes, and
        // it contributes to both maps at once: the winner is rewarded for beating
        // a highly-ranked opponent, the loser is penalized for losing to one. An
        // inconsistent game feeds neither map here — it already drove the primary
        // loss, and double-counting it into SOS would reward/penalize it twice.
        if winner_rank < loser_rank {
            *q_win.get_mut(&game.winner).expect("winner present in order") += (n - loser_rank + 1.0).powf(k);
            *q_loss.get_mut(&game.loser).expect("loser present in order") += winner_rank.powf(k);
        }
    }

    let q_max_win = q_win.values().cloned().fold(0.0_f64, f64::max);
    let q_max_win = if q_win.is_empty() { 1.0 } else { q_max_win };
    let q_max_loss = q_loss.values().cloned().fold(0.0_f64, f64::max);
    let q_max_loss = if q_loss.is_empty() { 1.0 } else { q_max_loss };

    order
        .iter()
        .map(|c| {
            let win_component = lambda * (q_win[c] / (q_max_win + epsilon));
            let loss_component = (1.0 - lambda) * (q_loss[c] / (q_max_loss + epsilon));
            (c.clone(), win_component - loss_component)
        })
        .collect()
}
