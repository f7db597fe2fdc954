use crate::cli::PassthroughParams;
use crate::error::GitDepsError;
use crate::manifest::read_document;
use crate::output::{JsonStyle, write_json};
use crate::passthrough::document_to_json;

pub async fn run_passthrough(params: PassthroughParams) -> Result<(), GitDepsError> {
    let PassthroughParams {
        input_path,
        output_path,
        keys,
    } = params;

    let root = read_document(&input_path).await?;
    let document = document_to_json(&root, &keys);

    write_json(&output_path, &document, JsonStyle::Pretty).await?;

    tracing::info!("Parsed tree written to {}", output_path.display());
    Ok(())
}
