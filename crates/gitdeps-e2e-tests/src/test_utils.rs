use eyre::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SCENARIO_MANIFEST: &str = r#"<DependencyManifest BaseUrl="https://cdn.test/base">
  <Packs>
    <Pack Hash="h1" RemotePath="r1"/>
    <Pack Hash="h2" RemotePath="r2"/>
  </Packs>
</DependencyManifest>"#;

pub const SCENARIO_OUTPUT: &str = r#"{"h1":{"downloadUrl":"https://cdn.test/base/r1/h1","id":"h1"},"h2":{"downloadUrl":"https://cdn.test/base/r2/h2","id":"h2"}}"#;

/// A manifest shaped like the ones shipped with the engine, with a byte-order mark.
pub const ENGINE_MANIFEST: &str = "\u{feff}<?xml version=\"1.0\" encoding=\"utf-8\"?>
<DependencyManifest xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" BaseUrl=\"http://cdn.unrealengine.com/dependencies\">
  <Files>
    <File Name=\"Engine/Binaries/ThirdParty/Ogg/libogg.dll\" Hash=\"b1\" />
    <File Name=\"Engine/Source/Programs/Tool.cs\" Hash=\"b2\" />
    <File Name=\"Engine/Content/Splash.png\" Hash=\"b3\" />
  </Files>
  <Blobs>
    <Blob Hash=\"b1\" Size=\"10\" PackHash=\"p1\" PackOffset=\"0\" />
    <Blob Hash=\"b2\" Size=\"20\" PackHash=\"p2\" PackOffset=\"0\" />
    <Blob Hash=\"b3\" Size=\"30\" PackHash=\"p3\" PackOffset=\"0\" />
  </Blobs>
  <Packs>
    <Pack Hash=\"p1\" Size=\"10\" CompressedSize=\"8\" RemotePath=\"UnrealEngine-1\" />
    <Pack Hash=\"p2\" Size=\"20\" CompressedSize=\"16\" RemotePath=\"UnrealEngine-2\" />
    <Pack Hash=\"p3\" Size=\"30\" CompressedSize=\"24\" RemotePath=\"UnrealEngine-3\" />
  </Packs>
</DependencyManifest>
";

pub fn setup_test_environment() -> Result<TempDir> {
    Ok(tempfile::tempdir()?)
}

pub fn write_manifest(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("gitdeps_lib=debug,gitdeps_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
