mod model;
mod parse;

pub use model::{Blob, DependencyFile, Pack, WorkingManifest};
pub use parse::ROOT_ELEMENT;

use crate::error::GitDepsError;
use crate::xml::{Element, parse_document};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// File name looked up when the input path is a directory.
pub const DEFAULT_MANIFEST_NAME: &str = ".ue4dependencies";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Resolves the manifest location: a directory means `<dir>/.ue4dependencies`.
pub async fn resolve_manifest_path(input: &Path) -> Result<PathBuf, GitDepsError> {
    let read_error = |source| GitDepsError::Read {
        path: input.to_path_buf(),
        source,
    };

    let metadata = tokio::fs::metadata(input).await.map_err(read_error)?;
    if metadata.is_dir() {
        let manifest_path = input.join(DEFAULT_MANIFEST_NAME);
        tracing::debug!("Input is a directory, using {}", manifest_path.display());
        Ok(manifest_path)
    } else {
        Ok(input.to_path_buf())
    }
}

/// Decodes manifest bytes as UTF-8.
///
/// Invalid sequences are replaced with U+FFFD and a leading byte-order mark is dropped.
pub fn decode_manifest_text(bytes: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(bytes);
    if matches!(text, Cow::Owned(_)) {
        tracing::warn!("Manifest is not valid UTF-8, invalid sequences were replaced");
    }

    match text {
        Cow::Borrowed(text) => Cow::Borrowed(text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)),
        Cow::Owned(text) => match text.strip_prefix(BYTE_ORDER_MARK) {
            Some(stripped) => Cow::Owned(stripped.to_string()),
            None => Cow::Owned(text),
        },
    }
}

/// Reads and parses the manifest document without checking its schema.
pub async fn read_document(input: &Path) -> Result<Element, GitDepsError> {
    let manifest_path = resolve_manifest_path(input).await?;

    tracing::info!("Reading manifest from {}", manifest_path.display());
    let bytes = tokio::fs::read(&manifest_path)
        .await
        .map_err(|source| GitDepsError::Read {
            path: manifest_path.clone(),
            source,
        })?;

    let text = decode_manifest_text(&bytes);
    let root = parse_document(&text)?;
    tracing::debug!(
        "Parsed <{}> with {} child elements",
        root.name,
        root.children.len()
    );
    Ok(root)
}

/// Reads, parses and validates a dependency manifest.
pub async fn load_manifest(input: &Path) -> Result<WorkingManifest, GitDepsError> {
    let root = read_document(input).await?;
    let manifest = WorkingManifest::try_from(&root)?;
    tracing::info!(
        "Loaded manifest with {} packs, {} blobs, {} files",
        manifest.packs.len(),
        manifest.blobs.len(),
        manifest.files.len()
    );
    Ok(manifest)
}

/// Reads and parses the manifest, checking only the fields flattening uses.
pub async fn load_pack_table(input: &Path) -> Result<WorkingManifest, GitDepsError> {
    let root = read_document(input).await?;
    let manifest = WorkingManifest::packs_only(&root)?;
    tracing::info!("Loaded manifest with {} packs", manifest.packs.len());
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strips_byte_order_mark() {
        let bytes = "\u{feff}<DependencyManifest/>".as_bytes();
        assert_eq!(decode_manifest_text(bytes), "<DependencyManifest/>");
    }

    #[test]
    fn test_decode_replaces_invalid_sequences() {
        let bytes = b"<a b=\"\xff\"/>";
        assert_eq!(decode_manifest_text(bytes), "<a b=\"\u{fffd}\"/>");
    }

    #[tokio::test]
    async fn test_directory_input_resolves_default_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_MANIFEST_NAME),
            r#"<DependencyManifest BaseUrl="b"><Packs/></DependencyManifest>"#,
        )
        .unwrap();

        let resolved = resolve_manifest_path(dir.path()).await.unwrap();
        assert_eq!(resolved, dir.path().join(DEFAULT_MANIFEST_NAME));

        let manifest = load_manifest(dir.path()).await.unwrap();
        assert_eq!(manifest.base_url, "b");
    }

    #[tokio::test]
    async fn test_missing_input_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_manifest(&dir.path().join("nope.xml")).await.unwrap_err();
        assert!(matches!(err, GitDepsError::Read { .. }), "{err:?}");
    }
}
