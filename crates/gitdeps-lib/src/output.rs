use crate::error::GitDepsError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

const PRETTY_INDENT: &[u8] = b"    ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonStyle {
    Compact,
    /// Four-space indentation
    Pretty,
}

pub fn to_json_bytes<T: Serialize + ?Sized>(
    value: &T,
    style: JsonStyle,
) -> Result<Vec<u8>, GitDepsError> {
    match style {
        JsonStyle::Compact => Ok(serde_json::to_vec(value)?),
        JsonStyle::Pretty => {
            let mut buffer = Vec::new();
            let mut serializer =
                Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(PRETTY_INDENT));
            value.serialize(&mut serializer)?;
            Ok(buffer)
        }
    }
}

/// Serializes `value` completely, then replaces the file at `path` with it.
pub async fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    style: JsonStyle,
) -> Result<(), GitDepsError> {
    let bytes = to_json_bytes(value, style)?;

    tokio::fs::write(path, &bytes)
        .await
        .map_err(|source| GitDepsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
