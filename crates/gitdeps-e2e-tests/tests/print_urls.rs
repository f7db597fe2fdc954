use gitdeps_e2e_tests::{ENGINE_MANIFEST, init_tracing, setup_test_environment, write_manifest};
use gitdeps_lib::cli::{Command, ResolvedCommand, render_pack_urls, resolve_command};
use gitdeps_lib::urls::UrlFormat;

async fn render(input: &str, format: UrlFormat, prefixes: &[&str]) -> String {
    let command = Command::PrintUrls {
        input_path: input.to_string(),
        format,
        prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
    };
    match resolve_command(command).expect("Failed to resolve print-urls command") {
        ResolvedCommand::PrintUrls(params) => render_pack_urls(&params)
            .await
            .expect("Rendering urls should succeed"),
        _ => unreachable!("Resolved command type mismatch"),
    }
}

#[tokio::test]
async fn test_print_all_urls_as_json() {
    init_tracing();

    let temp_dir = setup_test_environment().unwrap();
    write_manifest(temp_dir.path(), ".ue4dependencies", ENGINE_MANIFEST).unwrap();

    let out = render(temp_dir.path().to_str().unwrap(), UrlFormat::Json, &[]).await;
    let urls: Vec<String> = serde_json::from_str(&out).unwrap();

    assert_eq!(
        urls,
        vec![
            "http://cdn.unrealengine.com/dependencies/UnrealEngine-1/p1",
            "http://cdn.unrealengine.com/dependencies/UnrealEngine-2/p2",
            "http://cdn.unrealengine.com/dependencies/UnrealEngine-3/p3",
        ]
    );
}

#[tokio::test]
async fn test_print_prefixed_urls_for_bazel() {
    init_tracing();

    let temp_dir = setup_test_environment().unwrap();
    let input = write_manifest(temp_dir.path(), "deps.xml", ENGINE_MANIFEST).unwrap();

    let out = render(
        input.to_str().unwrap(),
        UrlFormat::Bazel,
        &["Engine/Binaries", "Engine/Source/Programs"],
    )
    .await;

    assert_eq!(
        out,
        "urls = [\"http://cdn.unrealengine.com/dependencies/UnrealEngine-1/p1\"],\
         urls = [\"http://cdn.unrealengine.com/dependencies/UnrealEngine-2/p2\"],"
    );
}
