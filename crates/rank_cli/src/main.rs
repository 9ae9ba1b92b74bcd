// crates/rank_cli/src/main.rs
//
// rankctl — CLI entrypoint for the ranking engine.
// Drives normalize -> anneal -> slide -> report -> filter -> emit end to end.
// Strictly offline & deterministic: no network, no OS RNG.

mod args;

use std::process::ExitCode;

use args::{parse_and_validate, resolve_params, Args};
use rank_io::{load_filter, load_games, write_output};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = match parse_and_validate() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("rankctl: error: {e}");
            return ExitCode::from(1);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            eprintln!("rankctl: error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let params = resolve_params(&args).map_err(|e| e.to_string())?;

    let games = load_games(&args.games).map_err(|e| e.to_string())?;
    let filter = args
        .filter
        .as_deref()
        .map(load_filter)
        .transpose()
        .map_err(|e| e.to_string())?;

    let doc = rank_pipeline::run(&games, &params, filter.as_deref()).map_err(|e| e.to_string())?;

    write_output(&args.out, &doc).map_err(|e| e.to_string())?;

    if !args.quiet {
        print_summary(&doc);
    }

    Ok(())
}

/// Log the top-10 ranking as a human-readable table, mirroring the console
/// summary the original tool printed at the end of a run.
fn print_summary(doc: &rank_io::OutputDocument) {
    tracing::info!(
        final_loss = doc.info.final_loss,
        total_competitors = doc.info.total_competitors,
        ranked_competitors = doc.info.ranked_competitors,
        "ranking complete, writing summary"
    );

    for entry in doc.ranking.iter().take(10) {
        tracing::info!(
            rank = entry.rank,
            competitor = entry.competitor.as_str(),
            inconsistency_score = entry.inconsistency_score,
            sos = entry.sos,
            "ranked"
        );
    }
}
