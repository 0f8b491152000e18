//! archivesvc restart dispatcher

use std::ffi::OsString;
use std::process::ExitCode;

use archivesvc_restart::cli::{Cli, EarlyExit};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = match Cli::parse_args(&args) {
        Ok(cli) => cli,
        Err(EarlyExit::Display(info)) => {
            return match info.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(EarlyExit::Usage(err)) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_status());
        }
    };

    match cli.run().await {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(err.exit_status())
        }
    }
}
