use super::model::{Blob, DependencyFile, Pack, WorkingManifest};
use crate::error::GitDepsError;
use crate::xml::Element;
use std::str::FromStr;

pub const ROOT_ELEMENT: &str = "DependencyManifest";

impl WorkingManifest {
    /// Reads only what a download table needs: `BaseUrl` and each pack's
    /// `Hash` and `RemotePath`. Files, blobs and size attributes are ignored.
    pub fn packs_only(root: &Element) -> Result<Self, GitDepsError> {
        let (base_url, packs) = base_url_and_packs(root)?;

        let packs = packs
            .children_named("Pack")
            .enumerate()
            .map(|(index, pack)| {
                Ok(Pack {
                    hash: required(pack, index, "Hash")?,
                    remote_path: required(pack, index, "RemotePath")?,
                    size: None,
                    compressed_size: None,
                })
            })
            .collect::<Result<Vec<_>, GitDepsError>>()?;

        Ok(Self {
            base_url,
            packs,
            files: Vec::new(),
            blobs: Vec::new(),
        })
    }
}

impl TryFrom<&Element> for WorkingManifest {
    type Error = GitDepsError;

    fn try_from(root: &Element) -> Result<Self, Self::Error> {
        let (base_url, packs) = base_url_and_packs(root)?;

        let packs = packs
            .children_named("Pack")
            .enumerate()
            .map(|(index, pack)| parse_pack(index, pack))
            .collect::<Result<Vec<_>, _>>()?;

        let files = match root.child("Files") {
            Some(files) => files
                .children_named("File")
                .enumerate()
                .map(|(index, file)| parse_file(index, file))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let blobs = match root.child("Blobs") {
            Some(blobs) => blobs
                .children_named("Blob")
                .enumerate()
                .map(|(index, blob)| parse_blob(index, blob))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            base_url,
            packs,
            files,
            blobs,
        })
    }
}

fn base_url_and_packs(root: &Element) -> Result<(String, &Element), GitDepsError> {
    if root.name != ROOT_ELEMENT {
        return Err(GitDepsError::schema(format!(
            "root element <{}> (found <{}>)",
            ROOT_ELEMENT, root.name
        )));
    }

    let base_url = root.required_attribute("BaseUrl")?.to_string();
    if url::Url::parse(&base_url).is_err() {
        tracing::warn!(base_url = %base_url, "BaseUrl is not an absolute URL, using it verbatim");
    }

    Ok((base_url, root.required_child("Packs")?))
}

fn parse_pack(index: usize, pack: &Element) -> Result<Pack, GitDepsError> {
    Ok(Pack {
        hash: required(pack, index, "Hash")?,
        remote_path: required(pack, index, "RemotePath")?,
        size: optional_number(pack, "Size")?,
        compressed_size: optional_number(pack, "CompressedSize")?,
    })
}

fn parse_file(index: usize, file: &Element) -> Result<DependencyFile, GitDepsError> {
    Ok(DependencyFile {
        name: required(file, index, "Name")?,
        hash: required(file, index, "Hash")?,
        expected_hash: file.attribute("ExpectedHash").map(str::to_string),
        timestamp: optional_number(file, "Timestamp")?,
        is_executable: optional_bool(file, "IsExecutable")?.unwrap_or(false),
    })
}

fn parse_blob(index: usize, blob: &Element) -> Result<Blob, GitDepsError> {
    Ok(Blob {
        hash: required(blob, index, "Hash")?,
        pack_hash: required(blob, index, "PackHash")?,
        size: optional_number(blob, "Size")?,
        pack_offset: optional_number(blob, "PackOffset")?,
    })
}

fn required(element: &Element, index: usize, name: &str) -> Result<String, GitDepsError> {
    element
        .attribute(name)
        .map(str::to_string)
        .ok_or_else(|| {
            GitDepsError::schema(format!(
                "attribute {} on <{}> #{}",
                name, element.name, index
            ))
        })
}

fn optional_number<T>(element: &Element, name: &str) -> Result<Option<T>, GitDepsError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    element
        .attribute(name)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| GitDepsError::InvalidAttribute {
                    attribute: format!("{}.{}", element.name, name),
                    value: value.to_string(),
                    reason: e.to_string(),
                })
        })
        .transpose()
}

fn optional_bool(element: &Element, name: &str) -> Result<Option<bool>, GitDepsError> {
    element
        .attribute(name)
        .map(|value| match value.trim() {
            v if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
            v if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
            _ => Err(GitDepsError::InvalidAttribute {
                attribute: format!("{}.{}", element.name, name),
                value: value.to_string(),
                reason: "expected true or false".to_string(),
            }),
        })
        .transpose()
}
