//! CLI argument parsing with clap derive

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use crate::application::ConfigStore as _;
use crate::application::services::restart;
use crate::domain::{DispatchError, EnvironmentName, usage};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::fs::{LocalFs, dispatcher_base_dir};
use crate::infra::profile::ShellProfileActivator;
use crate::output::OutputContext;

/// Restart the archive service in a deployment environment
#[derive(Parser, Debug)]
#[command(name = "restart", version)]
pub struct Cli {
    /// Deployment environment: localdev, integration, staging or prod
    pub environment: OsString,

    /// Configuration file (defaults to restart.yaml next to this binary)
    #[arg(long, value_name = "PATH", env = "ARCHIVESVC_RESTART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Resolve and print the manager command line without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Result of argument parsing when no dispatch should happen.
#[derive(Debug)]
pub enum EarlyExit {
    /// `--help` or `--version`; print and exit 0.
    Display(clap::Error),
    /// Anything else, including a wrong positional count.
    Usage(DispatchError),
}

impl Cli {
    /// Parse `args` (including `argv[0]`).
    ///
    /// A lone argument is always the environment, even when it looks like an
    /// option (`-x`, `--help`), and reaches the manager unchanged. Options
    /// only take effect alongside an environment. Every other parse failure
    /// except help/version collapses into a usage error naming the program.
    ///
    /// # Errors
    ///
    /// Returns [`EarlyExit`] when the dispatcher must stop before running.
    pub fn parse_args(args: &[OsString]) -> Result<Self, EarlyExit> {
        let parsed = match args {
            [program, environment] => Self::try_parse_from([
                program.as_os_str(),
                OsStr::new("--"),
                environment.as_os_str(),
            ]),
            _ => Self::try_parse_from(args),
        };
        parsed.map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EarlyExit::Display(err),
            _ => EarlyExit::Usage(DispatchError::Usage {
                program: usage::program_name(args.first().map(OsString::as_os_str)),
            }),
        })
    }

    /// Execute the restart and return the dispatcher's exit status.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::FatalDelegation`] if the manager could not be
    /// started.
    pub async fn run(self) -> Result<u8, DispatchError> {
        let Cli {
            environment,
            config,
            dry_run,
            verbose,
            quiet,
            no_color,
        } = self;
        crate::logging::init(verbose);
        let ctx = OutputContext::new(no_color, quiet);

        let base_dir = dispatcher_base_dir()?;
        let loaded = YamlConfigStore::new(config, &base_dir).load()?;
        tracing::debug!(source = %loaded.source, "loaded configuration");

        let prepared = restart::prepare(
            &LocalFs,
            &ShellProfileActivator,
            &base_dir,
            &loaded.config,
            EnvironmentName::new(environment),
        )
        .await?;

        if dry_run {
            render_dry_run(&ctx, &prepared, &loaded.config.profile);
            return Ok(0);
        }

        let status = restart::delegate(&TokioCommandRunner, &prepared).await?;
        Ok(restart::exit_status(status))
    }
}

fn render_dry_run(ctx: &OutputContext, prepared: &restart::PreparedRestart, profile: &Path) {
    let request = &prepared.request;
    ctx.header("Dry run: manager not started");
    if request.environment.known().is_none() {
        ctx.warn(&format!(
            "'{}' is not a documented environment; the manager decides",
            request.environment
        ));
    }
    ctx.kv(
        "interpreter",
        &format!(
            "{} ({})",
            request.interpreter.display(),
            prepared.interpreter_source
        ),
    );
    ctx.kv(
        "profile",
        &format!("{} ({} variables)", profile.display(), prepared.env.len()),
    );
    ctx.kv("command", &request.command_line());
}
