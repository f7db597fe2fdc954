mod args;
mod flatten;
mod params;
mod passthrough;
mod print_urls;
mod resolved_command;

pub use args::{Args, Command, parse_args};
pub use flatten::run_flatten;
pub use params::{FlattenParams, PassthroughParams, PrintUrlsParams};
pub use passthrough::run_passthrough;
pub use print_urls::{render_pack_urls, run_print_urls};
pub use resolved_command::{ResolvedCommand, resolve_command};

use crate::error::GitDepsError;

/// Runs a resolved command to completion.
pub async fn run(command: ResolvedCommand) -> Result<(), GitDepsError> {
    match command {
        ResolvedCommand::Flatten(params) => run_flatten(params).await,
        ResolvedCommand::Passthrough(params) => run_passthrough(params).await,
        ResolvedCommand::PrintUrls(params) => run_print_urls(params).await,
    }
}
