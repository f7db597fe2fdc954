use crate::urls::UrlFormat;
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

#[derive(Debug, Clone)]
pub enum Command {
    Convert {
        config_path: Option<String>,
        input_path: Option<String>,
        output_path: Option<String>,
        passthrough: bool,
        pretty: bool,
    },
    PrintUrls {
        input_path: String,
        format: UrlFormat,
        prefixes: Vec<String>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "gitdeps",
    version,
    about = "Flatten an Unreal Engine dependency manifest into a hash-keyed JSON download table",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file with output defaults"
    )]
    config: Option<String>,

    #[arg(
        long = "passthrough",
        help = "Write the whole parsed XML tree instead of the download table"
    )]
    passthrough: bool,

    #[arg(long = "pretty", help = "Indent the download table with four spaces")]
    pretty: bool,

    #[arg(value_name = "INPUT", help = "Manifest file, or a directory containing .ue4dependencies")]
    input: Option<String>,

    #[arg(value_name = "OUTPUT", help = "JSON file to write, replaced if it exists")]
    output: Option<String>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Print the download URL of every pack in the manifest
    #[command(name = "print-urls", visible_alias = "printUrls")]
    PrintUrls {
        #[arg(
            short = 'i',
            long = "input",
            value_name = "PATH",
            help = "Manifest file, or a directory containing .ue4dependencies",
            default_value = "."
        )]
        input: String,

        #[arg(
            short = 'o',
            long = "output",
            value_name = "FORMAT",
            help = "How the urls should be printed",
            value_enum,
            default_value_t = UrlFormat::Json
        )]
        format: UrlFormat,

        #[arg(
            long = "prefix",
            value_name = "PREFIX",
            help = "Only include packs containing files with these path prefixes (repeat or use comma-separated values)",
            action = ArgAction::Append,
            value_delimiter = ','
        )]
        prefixes: Vec<String>,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = match cli.command {
        Some(CliCommand::PrintUrls {
            input,
            format,
            prefixes,
        }) => Command::PrintUrls {
            input_path: input,
            format,
            prefixes,
        },
        None => Command::Convert {
            config_path: cli.config,
            input_path: cli.input,
            output_path: cli.output,
            passthrough: cli.passthrough,
            pretty: cli.pretty,
        },
    };

    Args { command, log_level }
}
