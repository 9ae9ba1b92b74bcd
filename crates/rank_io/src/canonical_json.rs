//! Canonical JSON rendering.
//!
//! - Objects: keys sorted lexicographically (UTF-8 codepoint order), recursively.
//! - Arrays: order preserved — callers are responsible for stable ordering.
//! - Output: pretty-printed (2-space indent, matching the original tool's
//!   `json.dump(..., indent=2)`), always LF-terminated.
//! - Writes are atomic: a temp file in the same directory, synced, then renamed
//!   over the destination.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::IoError;

/// Recursively sort every object's keys. Defensive: `serde_json::Map` is
/// already key-sorted by default (it's backed by a `BTreeMap` unless the
/// `preserve_order` feature is enabled somewhere in the dependency graph),
/// but canonicalizing explicitly means output does not depend on that detail.
fn canonicalize(v: Value) -> Value {
    match v {
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        Value::Object(map) => {
            let mut sorted: Vec<(String, Value)> =
                map.into_iter().map(|(k, val)| (k, canonicalize(val))).collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(sorted.into_iter().collect())
        }
        other => other,
    }
}

/// Render `value` as canonical, pretty-printed, LF-terminated JSON bytes.
pub fn to_canonical_bytes(value: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let canon = canonicalize(value.clone());
    let mut bytes = serde_json::to_vec_pretty(&canon)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write canonical JSON to `path` atomically (temp file + sync + rename).
pub fn write_canonical_file(path: &Path, value: &Value) -> Result<(), IoError> {
    let bytes = to_canonical_bytes(value).map_err(|source| IoError::Json {
        path: path.display().to_string(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| IoError::Write {
                path: path.display().to_string(),
                source,
            })?;
        }
    }

    let tmp = make_unique_tmp_path(path);
    write_and_sync(&tmp, &bytes).map_err(|source| IoError::Write {
        path: tmp.display().to_string(),
        source,
    })?;

    fs::rename(&tmp, path).map_err(|source| IoError::Write {
        path: path.display().to_string(),
        source,
    })
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}

fn make_unique_tmp_path(target: &Path) -> PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let pid = std::process::id();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let fname = target.file_name().and_then(|s| s.to_str()).unwrap_or("file");
    let tmp_name = format!("{fname}.{pid}.{n}.tmp");

    match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(tmp_name),
        _ => PathBuf::from(tmp_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_are_sorted_arrays_preserved() {
        let v = json!({
            "b": 1,
            "a": { "y": 1, "x": 2 },
            "arr": [ {"k": 2, "j": 1}, 3, "z" ]
        });
        let bytes = to_canonical_bytes(&v).unwrap();
        let s = String::from_utf8(bytes).unwrap();
        assert!(s.ends_with('\n'));
        let reparsed: Value = serde_json::from_str(&s).unwrap();
        assert_eq!(reparsed, v);
        // Key order within the first object: a, arr, b.
        let first_a = s.find("\"a\"").unwrap();
        let first_arr = s.find("\"arr\"").unwrap();
        let first_b = s.find("\"b\"").unwrap();
        assert!(first_a < first_arr && first_arr < first_b);
    }

    #[test]
    fn write_canonical_file_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let v = json!({"z": 1, "a": 2});
        write_canonical_file(&path, &v).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with('\n'));
        let reparsed: Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(reparsed, v);
    }
}
