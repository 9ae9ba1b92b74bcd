//! Drives the annealer and slider, then decorates and optionally filters
//! the resulting order into the final ranking.

use std::collections::HashSet;

use rank_algo::{anneal, compute_sos, inconsistency_report, slide};
use rank_core::{Competitor, Game, InconsistentGame, Order, Params, RankRng, RankingEntry};
use rank_io::{Info, OutputDocument};

use crate::error::PipelineError;

/// Collect the unique competitors appearing in `games`, in first-appearance
/// order. Deterministic, unlike relying on a hash-set's iteration order —
/// the only property the later seeded shuffle actually needs.
fn distinct_competitors(games: &[Game]) -> Vec<Competitor> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for game in games {
        for competitor in [&game.winner, &game.loser] {
            if seen.insert(competitor.clone()) {
                out.push(competitor.clone());
            }
        }
    }
    out
}

/// Run the full pipeline: normalize competitors, anneal, slide, report, then
/// apply the optional filter and renumber ranks sequentially.
pub fn run(
    games: &[Game],
    params: &Params,
    filter: Option<&[Competitor]>,
) -> Result<OutputDocument, PipelineError> {
    params.validate()?;

    let total_games = games.len();

    let mut competitors = distinct_competitors(games);
    let total_competitors = competitors.len();

    if competitors.is_empty() {
        return Ok(OutputDocument {
            parameters: *params,
            info: Info {
                final_loss: 0.0,
                loss_after_annealing: 0.0,
                slide_improvements_made: 0,
                total_games,
                total_competitors: 0,
                ranked_competitors: 0,
            },
            ranking: Vec::new(),
        });
    }

    // One continuous draw sequence feeds both the initial shuffle and every
    // later annealer draw, matching `random.seed(seed)` being called exactly
    // once in the original tool: reseeding for the annealer would replay the
    // words the shuffle already consumed instead of continuing past them.
    let mut rng = RankRng::from_seed_u64(params.seed);
    rng.shuffle_in_place(&mut competitors);

    let initial_order = Order::new(competitors);

    tracing::info!(total_games, total_competitors, "starting optimization");

    let annealed = anneal(initial_order, games, params, &mut rng);
    let loss_after_annealing = annealed.best_loss;

    tracing::info!(loss_after_annealing, "annealing complete; starting sliding optimization");

    let slid = slide(annealed.best_order, games, params);
    let final_order = slid.order;
    let final_loss = slid.best_loss;

    tracing::info!(
        final_loss,
        slide_improvements_made = slid.improvements_made,
        passes_run = slid.passes_run,
        "sliding optimization complete"
    );

    let (scores, mut details) = inconsistency_report(&final_order, games, params.alpha);
    let sos = compute_sos(&final_order, games, params.k, params.lambda, params.epsilon);

    let full_ranking: Vec<RankingEntry> = final_order
        .iter()
        .enumerate()
        .map(|(i, competitor)| RankingEntry {
            rank: i + 1,
            competitor: competitor.clone(),
            inconsistency_score: scores[competitor],
            sos: sos[competitor],
            inconsistent_games: details
                .remove(competitor)
                .unwrap_or_else(Vec::<InconsistentGame>::new),
        })
        .collect();

    let ranking = match filter {
        None => full_ranking,
        Some(allow) => {
            let allow: HashSet<&Competitor> = allow.iter().collect();
            full_ranking
                .into_iter()
                .filter(|entry| allow.contains(&entry.competitor))
                .enumerate()
                .map(|(i, mut entry)| {
                    entry.rank = i + 1;
                    entry
                })
                .collect()
        }
    };

    Ok(OutputDocument {
        parameters: *params,
        info: Info {
            final_loss,
            loss_after_annealing,
            slide_improvements_made: slid.improvements_made,
            total_games,
            total_competitors,
            ranked_competitors: ranking.len(),
        },
        ranking,
    })
}
