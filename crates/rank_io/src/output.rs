//! The `parameters` / `info` / `ranking` output document.

use std::path::Path;

use serde::Serialize;

use rank_core::{Params, RankingEntry};

use crate::canonical_json::write_canonical_file;
use crate::error::IoError;

#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub final_loss: f64,
    pub loss_after_annealing: f64,
    pub slide_improvements_made: u32,
    pub total_games: usize,
    pub total_competitors: usize,
    pub ranked_competitors: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputDocument {
    pub parameters: Params,
    pub info: Info,
    pub ranking: Vec<RankingEntry>,
}

/// Serialize `doc` and write it to `path` as canonical, LF-terminated JSON.
pub fn write_output(path: &Path, doc: &OutputDocument) -> Result<(), IoError> {
    let value = serde_json::to_value(doc).map_err(|source| IoError::Json {
        path: path.display().to_string(),
        source,
    })?;
    write_canonical_file(path, &value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rank_core::{Competitor, GameSide, InconsistentGame};

    #[test]
    fn output_document_round_trips_through_json() {
        let doc = OutputDocument {
            parameters: Params::default(),
            info: Info {
                final_loss: 0.0,
                loss_after_annealing: 0.0,
                slide_improvements_made: 0,
                total_games: 1,
                total_competitors: 2,
                ranked_competitors: 2,
            },
            ranking: vec![RankingEntry {
                rank: 1,
                competitor: Competitor::new("a"),
                inconsistency_score: 0,
                sos: 0.1,
                inconsistent_games: vec![InconsistentGame {
                    side: GameSide::Win,
                    opponent: Competitor::new("b"),
                    magnitude: 1,
                }],
            }],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        write_output(&path, &doc).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["parameters"]["SEED"], 42);
        assert_eq!(value["info"]["total_games"], 1);
        assert_eq!(value["ranking"][0]["SOS"], 0.1);
        assert_eq!(value["ranking"][0]["inconsistent_games"][0]["type"], "win");
    }
}
