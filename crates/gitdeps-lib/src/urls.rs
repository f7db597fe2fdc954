use crate::manifest::WorkingManifest;
use clap::ValueEnum;
use itertools::Itertools;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum UrlFormat {
    /// A JSON array of strings
    #[default]
    Json,
    /// `urls = ["..."],` fragments for a Bazel repository rule
    Bazel,
}

/// Download URLs of every pack, in manifest order. Repeated packs are listed again.
pub fn pack_urls(manifest: &WorkingManifest) -> Vec<String> {
    manifest
        .packs
        .iter()
        .map(|pack| manifest.pack_url(pack))
        .collect()
}

/// Download URLs of the packs holding at least one file under any of `prefixes`.
///
/// No prefixes means every pack.
pub fn pack_urls_with_prefixes(manifest: &WorkingManifest, prefixes: &[String]) -> Vec<String> {
    if prefixes.is_empty() {
        return pack_urls(manifest);
    }

    let wanted_blobs: HashSet<&str> = manifest
        .files
        .iter()
        .filter(|file| {
            prefixes
                .iter()
                .any(|prefix| file.name.starts_with(prefix.as_str()))
        })
        .map(|file| file.hash.as_str())
        .collect();

    let needed_packs: HashSet<&str> = manifest
        .blobs
        .iter()
        .filter(|blob| wanted_blobs.contains(blob.hash.as_str()))
        .map(|blob| blob.pack_hash.as_str())
        .collect();

    tracing::debug!(
        "{} of {} packs contain files matching {:?}",
        needed_packs.len(),
        manifest.packs.len(),
        prefixes
    );

    manifest
        .packs
        .iter()
        .filter(|pack| needed_packs.contains(pack.hash.as_str()))
        .map(|pack| manifest.pack_url(pack))
        .collect()
}

pub fn format_urls(urls: &[String], format: UrlFormat) -> Result<String, serde_json::Error> {
    match format {
        UrlFormat::Json => serde_json::to_string(urls),
        UrlFormat::Bazel => Ok(urls
            .iter()
            .map(|url| format!("urls = [\"{}\"],", url))
            .join("")),
    }
}
