//! Randomized global search: swap-move proposals with exponential-cooling
//! acceptance (simulated annealing).

use std::time::{Duration, Instant};

use rank_core::{Game, Order, Params, RankRng};

use crate::loss::total_loss;

/// Minimum wall-clock gap between two progress events, mirroring the
/// original tool's 10-second print cadence.
const PROGRESS_INTERVAL: Duration = Duration::from_secs(10);

pub struct AnnealOutcome {
    pub best_order: Order,
    pub best_loss: f64,
}

/// Run `params.annealing_iter` swap-move proposals starting from `initial`,
/// returning the best permutation observed (not necessarily the final one).
///
/// `max_iter` is a budget, not a convergence criterion: there is no early
/// exit. `rng` is the caller's own stream, already advanced past whatever
/// draws preceded this call (typically the initial shuffle) — acceptance
/// draws and move-index draws continue that same stream rather than
/// reseeding, so the whole run is reproducible given `params.seed`.
pub fn anneal(mut initial: Order, games: &[Game], params: &Params, rng: &mut RankRng) -> AnnealOutcome {
    let n = initial.len();
    let mut best_loss = total_loss(&initial, games, params.alpha, params.k, params.lambda, params.epsilon, true);
    let mut current_loss = best_loss;
    let mut best_order = initial.clone();

    if n < 2 {
        return AnnealOutcome { best_order, best_loss };
    }

    let mut temperature = 1.0f64;
    let start = Instant::now();
    let mut last_progress = start;

    for step in 0..params.annealing_iter {
        let (i, j) = rng
            .choose_two_distinct(n)
            .expect("n >= 2 checked above");

        initial.swap(i, j);
        let new_loss = total_loss(&initial, games, params.alpha, params.k, params.lambda, params.epsilon, true);
        let delta = new_loss - current_loss;

        let accept = if delta < 0.0 {
            true
        } else {
            let exponent = (-delta / temperature).max(-700.0);
            rng.next_unit_f64() < exponent.exp()
        };

        if accept {
            current_loss = new_loss;
            if new_loss < best_loss {
                best_loss = new_loss;
                best_order = initial.clone();
            }
        } else {
            // Revert the in-place swap: evaluating a rejected move must not
            // leave a trace in `current_order`.
            initial.swap(i, j);
        }

        if step % 1000 == 0 {
            temperature *= params.cooling_rate;
        }

        if last_progress.elapsed() >= PROGRESS_INTERVAL {
            tracing::debug!(
                step,
                max_iter = params.annealing_iter,
                current_loss,
                best_loss,
                temperature,
                "annealing progress"
            );
            last_progress = Instant::now();
        }
    }

    AnnealOutcome { best_order, best_loss }
}
