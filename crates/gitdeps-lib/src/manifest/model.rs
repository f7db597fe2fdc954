use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingManifest {
    pub base_url: String,
    pub packs: Vec<Pack>,
    pub files: Vec<DependencyFile>,
    pub blobs: Vec<Blob>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    /// Content hash, also the last segment of the download URL
    pub hash: String,
    pub remote_path: String,
    pub size: Option<u64>,
    pub compressed_size: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyFile {
    /// Path relative to the working tree root
    pub name: String,
    /// Hash of the blob holding this file's contents
    pub hash: String,
    pub expected_hash: Option<String>,
    pub timestamp: Option<i64>,
    pub is_executable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub hash: String,
    /// Hash of the pack this blob is stored in
    pub pack_hash: String,
    pub size: Option<u64>,
    pub pack_offset: Option<u64>,
}

impl WorkingManifest {
    /// Download URL of a pack: `{BaseUrl}/{RemotePath}/{Hash}`, joined verbatim.
    pub fn pack_url(&self, pack: &Pack) -> String {
        format!("{}/{}/{}", self.base_url, pack.remote_path, pack.hash)
    }
}
