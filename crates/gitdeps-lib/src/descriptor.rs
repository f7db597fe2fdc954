use crate::manifest::WorkingManifest;
use indexmap::IndexMap;
use serde::Serialize;

/// Everything a downloader needs to fetch one pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadDescriptor {
    pub download_url: String,
    /// Pack hash
    pub id: String,
}

/// Pack hash to descriptor, in manifest order.
pub type DescriptorMapping = IndexMap<String, DownloadDescriptor>;

/// Flattens the manifest into a hash-keyed mapping.
///
/// A repeated hash keeps its first position but takes the last pack's values.
pub fn build_descriptor_mapping(manifest: &WorkingManifest) -> DescriptorMapping {
    let mut mapping = DescriptorMapping::with_capacity(manifest.packs.len());

    for pack in &manifest.packs {
        let descriptor = DownloadDescriptor {
            download_url: manifest.pack_url(pack),
            id: pack.hash.clone(),
        };
        if let Some(previous) = mapping.insert(pack.hash.clone(), descriptor) {
            tracing::debug!(
                hash = %pack.hash,
                previous_url = %previous.download_url,
                "Duplicate pack hash, keeping the later entry"
            );
        }
    }

    mapping
}
