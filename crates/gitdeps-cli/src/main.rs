use gitdeps_lib::cli::{parse_args, resolve_command, run};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(report) = color_eyre::install() {
        eprintln!("Failed to install error reporting: {report}");
    }

    let args = parse_args();
    let result = match resolve_command(args.command) {
        Ok(command) => run(command).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
