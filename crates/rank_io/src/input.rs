//! Reading games and the optional competitor filter list.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use rank_core::{Competitor, Game};

use crate::error::IoError;

#[derive(Debug, Deserialize)]
struct RawGame {
    winner: Option<String>,
    loser: Option<String>,
}

/// Load an ordered sequence of games from a JSON array of `{winner, loser}`
/// records. A record missing either field, or a document that is not a JSON
/// array, is a fatal, reported error — there is no silent skipping.
pub fn load_games(path: &Path) -> Result<Vec<Game>, IoError> {
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let raw: Vec<RawGame> = serde_json::from_str(&text).map_err(|source| IoError::Json {
        path: path.display().to_string(),
        source,
    })?;

    raw.into_iter()
        .map(|g| match (g.winner, g.loser) {
            (Some(winner), Some(loser)) => Ok(Game::new(winner, loser)),
            (None, _) => Err(IoError::MalformedGame {
                path: path.display().to_string(),
                reason: "missing \"winner\" field".to_owned(),
            }),
            (_, None) => Err(IoError::MalformedGame {
                path: path.display().to_string(),
                reason: "missing \"loser\" field".to_owned(),
            }),
        })
        .collect()
}

/// Load an optional filter list: a JSON array of competitor strings. Entries
/// that do not match any competitor in the game set are ignored silently by
/// the caller, not here.
pub fn load_filter(path: &Path) -> Result<Vec<Competitor>, IoError> {
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let raw: Vec<String> = serde_json::from_str(&text).map_err(|source| IoError::Json {
        path: path.display().to_string(),
        source,
    })?;

    Ok(raw.into_iter().map(Competitor::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.json");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_well_formed_games() {
        let (_dir, path) = write_temp(r#"[{"winner":"a","loser":"b"},{"winner":"b","loser":"c"}]"#);
        let games = load_games(&path).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].winner, Competitor::new("a"));
        assert_eq!(games[1].loser, Competitor::new("c"));
    }

    #[test]
    fn missing_winner_field_is_fatal() {
        let (_dir, path) = write_temp(r#"[{"loser":"b"}]"#);
        assert!(matches!(load_games(&path), Err(IoError::MalformedGame { .. })));
    }

    #[test]
    fn missing_file_is_fatal() {
        let result = load_games(Path::new("/nonexistent/games.json"));
        assert!(matches!(result, Err(IoError::Read { .. })));
    }

    #[test]
    fn loads_filter_list() {
        let (_dir, path) = write_temp(r#"["a", "c"]"#);
        let filter = load_filter(&path).unwrap();
        assert_eq!(filter, vec![Competitor::new("a"), Competitor::new("c")]);
    }
}
