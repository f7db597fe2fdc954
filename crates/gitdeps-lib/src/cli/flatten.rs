use crate::cli::FlattenParams;
use crate::descriptor::build_descriptor_mapping;
use crate::error::GitDepsError;
use crate::manifest::load_pack_table;
use crate::output::write_json;

pub async fn run_flatten(params: FlattenParams) -> Result<(), GitDepsError> {
    let FlattenParams {
        input_path,
        output_path,
        style,
    } = params;

    let manifest = load_pack_table(&input_path).await?;

    let mapping = build_descriptor_mapping(&manifest);
    tracing::info!(
        "Flattened {} packs into {} download descriptors",
        manifest.packs.len(),
        mapping.len()
    );

    write_json(&output_path, &mapping, style).await?;

    tracing::info!("Download table written to {}", output_path.display());
    Ok(())
}
