use crate::cli::args::Command;
use crate::cli::params::{FlattenParams, PassthroughParams, PrintUrlsParams};
use crate::config::{Config, OutputMode, load_config};
use crate::error::GitDepsError;
use crate::output::JsonStyle;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Flatten(FlattenParams),
    Passthrough(PassthroughParams),
    PrintUrls(PrintUrlsParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, GitDepsError> {
    match command {
        Command::Convert {
            config_path,
            input_path,
            output_path,
            passthrough,
            pretty,
        } => {
            let app_config = match config_path {
                Some(config_path) => {
                    tracing::info!("Loading configuration from {}", config_path);
                    load_config(&config_path)?
                }
                None => Config::default(),
            };

            let input_path = input_path.map(PathBuf::from).ok_or_else(|| {
                GitDepsError::CliArgumentValidation {
                    details: "No input manifest provided. Usage: gitdeps <INPUT> <OUTPUT>"
                        .to_string(),
                }
            })?;
            let output_path = output_path.map(PathBuf::from).ok_or_else(|| {
                GitDepsError::CliArgumentValidation {
                    details: "No output path provided. Usage: gitdeps <INPUT> <OUTPUT>"
                        .to_string(),
                }
            })?;

            let mode = if passthrough {
                OutputMode::Passthrough
            } else {
                app_config.output.mode
            };

            match mode {
                OutputMode::Flatten => Ok(ResolvedCommand::Flatten(FlattenParams {
                    input_path,
                    output_path,
                    style: if pretty || app_config.output.pretty {
                        JsonStyle::Pretty
                    } else {
                        JsonStyle::Compact
                    },
                })),
                OutputMode::Passthrough => Ok(ResolvedCommand::Passthrough(PassthroughParams {
                    input_path,
                    output_path,
                    keys: app_config.passthrough,
                })),
            }
        }
        Command::PrintUrls {
            input_path,
            format,
            prefixes,
        } => {
            let prefixes = prefixes
                .into_iter()
                .map(|prefix| prefix.trim().to_string())
                .filter(|prefix| !prefix.is_empty())
                .collect();

            Ok(ResolvedCommand::PrintUrls(PrintUrlsParams {
                input_path: PathBuf::from(input_path),
                format,
                prefixes,
            }))
        }
    }
}
