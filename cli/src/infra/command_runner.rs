//! Infrastructure implementation of the `CommandRunner` port.

use std::ffi::OsString;
use std::path::Path;
use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;
use crate::domain::ActivatedEnv;

/// Production `CommandRunner` — spawns through tokio with inherited stdio.
///
/// No timeout and no `kill_on_drop`: the manager owns the service's
/// lifecycle and must outlive an interrupted dispatcher.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run_status(
        &self,
        program: &Path,
        args: &[OsString],
        env: &ActivatedEnv,
    ) -> Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .env_clear()
            .envs(env.iter())
            .spawn()
            .with_context(|| format!("failed to spawn {}", program.display()))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {}", program.display()))
    }
}
