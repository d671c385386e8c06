//! JSON output for a completed run.

use std::path::{Path, PathBuf};

use leaflets_core::LeafletRecord;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum OutputError {
    #[error("failed to serialize leaflets: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes `records` to `path` as a pretty-printed JSON array, replacing any
/// existing file.
///
/// Uses four-space indentation; non-ASCII text (umlauts in shop names and
/// titles) is written as-is rather than `\u`-escaped.
pub(crate) fn save_leaflets(records: &[LeafletRecord], path: &Path) -> Result<(), OutputError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;

    std::fs::write(path, buf).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
