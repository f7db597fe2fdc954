use gitdeps_e2e_tests::{
    SCENARIO_MANIFEST, init_tracing, setup_test_environment, write_manifest,
};
use gitdeps_lib::GitDepsError;
use gitdeps_lib::cli::{Command, ResolvedCommand, resolve_command, run};
use serde_json::json;
use std::path::Path;

fn passthrough_command(input: &Path, output: &Path) -> Command {
    Command::Convert {
        config_path: None,
        input_path: Some(input.to_string_lossy().into_owned()),
        output_path: Some(output.to_string_lossy().into_owned()),
        passthrough: true,
        pretty: false,
    }
}

#[tokio::test]
async fn test_passthrough_mirrors_tree() {
    init_tracing();

    let temp_dir = setup_test_environment().expect("Failed to setup test environment");
    let input = write_manifest(temp_dir.path(), "deps.xml", SCENARIO_MANIFEST).unwrap();
    let output = temp_dir.path().join("tree.json");

    let command = resolve_command(passthrough_command(&input, &output)).unwrap();
    assert!(matches!(command, ResolvedCommand::Passthrough(_)));
    run(command).await.expect("Passthrough should succeed");

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(
        written.starts_with("{\n    \"DependencyManifest\": {"),
        "Output should be indented with four spaces: {written}"
    );

    let tree: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        tree,
        json!({
            "DependencyManifest": {
                "$": { "BaseUrl": "https://cdn.test/base" },
                "Packs": [{
                    "Pack": [
                        { "$": { "Hash": "h1", "RemotePath": "r1" } },
                        { "$": { "Hash": "h2", "RemotePath": "r2" } }
                    ]
                }]
            }
        })
    );
}

#[tokio::test]
async fn test_passthrough_does_not_validate_schema() {
    init_tracing();

    let temp_dir = setup_test_environment().unwrap();
    let input = write_manifest(temp_dir.path(), "other.xml", "<Other><Item/><Item/></Other>").unwrap();
    let output = temp_dir.path().join("tree.json");

    run(resolve_command(passthrough_command(&input, &output)).unwrap())
        .await
        .expect("Passthrough should succeed");

    let tree: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(tree, json!({ "Other": { "Item": ["", ""] } }));
}

#[tokio::test]
async fn test_passthrough_malformed_xml_writes_nothing() {
    init_tracing();

    let temp_dir = setup_test_environment().unwrap();
    let input = write_manifest(temp_dir.path(), "bad.xml", "<a><b></a>").unwrap();
    let output = temp_dir.path().join("tree.json");

    let err = run(resolve_command(passthrough_command(&input, &output)).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, GitDepsError::Parse { .. }), "{err:?}");
    assert!(!output.exists());
}
