// crates/rank_cli/src/args.rs
//
// Deterministic, offline CLI argument parsing & validation.
// - No networked paths (reject http/https schemes)
// - All input paths must be local files that exist
// - An optional params-override document layers on top of `Params::default()`

use clap::Parser;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use rank_core::Params;

#[derive(Debug, Parser)]
#[command(name = "rankctl", about = "Deterministic pairwise ranking optimizer")]
pub struct Args {
    /// JSON array of `{"winner": ..., "loser": ...}` game records.
    #[arg(long)]
    pub games: PathBuf,

    /// JSON array of competitor names to restrict the emitted ranking to.
    #[arg(long)]
    pub filter: Option<PathBuf>,

    /// JSON document of parameter overrides, layered over the documented defaults.
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Where to write the ranking document.
    #[arg(long, default_value = "ranking.json")]
    pub out: PathBuf,

    /// Override VM-style seed without a params file.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress the human-readable summary table on stdout.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    NotFound(String),
    BadParams(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
            NotFound(p) => write!(f, "file not found: {p}"),
            BadParams(s) => write!(f, "invalid --params document: {s}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Entry point used by main.rs; validates paths without touching the pipeline.
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::parse();

    ensure_local_exists(&args.games, "--games")?;
    if let Some(p) = &args.filter {
        ensure_local_exists(p, "--filter")?;
    }
    if let Some(p) = &args.params {
        ensure_local_exists(p, "--params")?;
    }

    Ok(args)
}

fn ensure_local_exists(p: &PathBuf, label: &'static str) -> Result<(), CliError> {
    let s = p.to_string_lossy().to_string();
    if has_scheme(&s) {
        return Err(CliError::NonLocalPath(format!("{label} {s}")));
    }
    let meta = fs::metadata(p).map_err(|_| CliError::NotFound(format!("{label} {s}")))?;
    if !meta.is_file() {
        return Err(CliError::NotFound(format!("{label} {s}")));
    }
    Ok(())
}

fn has_scheme(s: &str) -> bool {
    s.contains("://") || s.starts_with("http:") || s.starts_with("https:")
}

/// Partial override document: every field optional, `UPPERCASE` to match the
/// full `Params` document's own rename, so a trimmed-down `Params` dump can
/// be reused verbatim as an override file.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
struct ParamsOverride {
    alpha: Option<u32>,
    k: Option<f64>,
    lambda: Option<f64>,
    epsilon: Option<f64>,
    seed: Option<u64>,
    annealing_iter: Option<u64>,
    cooling_rate: Option<f64>,
    max_slide_passes: Option<u32>,
    window_search_size: Option<u32>,
}

/// Build the effective `Params`: documented defaults, then the `--params`
/// file's overrides (if any), then a bare `--seed` flag on top of both.
pub fn resolve_params(args: &Args) -> Result<Params, CliError> {
    let mut params = Params::default();

    if let Some(path) = &args.params {
        let text = fs::read_to_string(path)
            .map_err(|e| CliError::BadParams(format!("{}: {e}", path.display())))?;
        let over: ParamsOverride = serde_json::from_str(&text)
            .map_err(|e| CliError::BadParams(format!("{}: {e}", path.display())))?;

        if let Some(v) = over.alpha {
            params.alpha = v;
        }
        if let Some(v) = over.k {
            params.k = v;
        }
        if let Some(v) = over.lambda {
            params.lambda = v;
        }
        if let Some(v) = over.epsilon {
            params.epsilon = v;
        }
        if let Some(v) = over.seed {
            params.seed = v;
        }
        if let Some(v) = over.annealing_iter {
            params.annealing_iter = v;
        }
        if let Some(v) = over.cooling_rate {
            params.cooling_rate = v;
        }
        if let Some(v) = over.max_slide_passes {
            params.max_slide_passes = v;
        }
        if let Some(v) = over.window_search_size {
            params.window_search_size = v;
        }
    }

    if let Some(seed) = args.seed {
        params.seed = seed;
    }

    Ok(params)
}
