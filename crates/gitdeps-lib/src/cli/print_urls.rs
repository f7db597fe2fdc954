use crate::cli::PrintUrlsParams;
use crate::error::GitDepsError;
use crate::manifest::load_manifest;
use crate::urls::{format_urls, pack_urls_with_prefixes};

/// Loads the manifest and renders the selected pack URLs.
pub async fn render_pack_urls(params: &PrintUrlsParams) -> Result<String, GitDepsError> {
    let manifest = load_manifest(&params.input_path).await?;
    let urls = pack_urls_with_prefixes(&manifest, &params.prefixes);
    Ok(format_urls(&urls, params.format)?)
}

pub async fn run_print_urls(params: PrintUrlsParams) -> Result<(), GitDepsError> {
    let out = render_pack_urls(&params).await?;
    println!("{}", out);
    Ok(())
}
