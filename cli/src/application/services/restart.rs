//! Restart use-case: resolve the interpreter, activate the profile, run the
//! manager once and hand back its exit status.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, PathProbe, ProfileActivator};
use crate::application::services::interpreter::{self, InterpreterSource};
use crate::domain::{ActivatedEnv, DispatcherConfig, EnvironmentName, InvocationRequest};

/// A fully resolved restart, ready to run.
#[derive(Debug, Clone)]
pub struct PreparedRestart {
    pub request: InvocationRequest,
    pub interpreter_source: InterpreterSource,
    pub env: ActivatedEnv,
}

/// Resolve everything the manager needs, without running it.
///
/// Steps run in order and the first failure aborts: profile activation,
/// then interpreter lookup. A bare default interpreter is searched on the
/// activated `PATH`, the one the manager will run under.
///
/// # Errors
///
/// Returns an error if the profile cannot be activated or no interpreter
/// can be found.
pub async fn prepare(
    probe: &impl PathProbe,
    activator: &impl ProfileActivator,
    base_dir: &Path,
    config: &DispatcherConfig,
    environment: EnvironmentName,
) -> Result<PreparedRestart> {
    if environment.known().is_none() {
        tracing::warn!(
            environment = %environment,
            "environment is not one of the documented names; passing it through"
        );
    }

    let env = activator
        .activate(&config.profile)
        .await
        .with_context(|| format!("activating profile {}", config.profile.display()))?;
    tracing::debug!(
        profile = %config.profile.display(),
        vars = env.len(),
        "activated profile"
    );

    let resolved = interpreter::resolve(probe, base_dir, &config.interpreter, env.get("PATH"))
        .context("resolving interpreter")?;
    tracing::debug!(
        interpreter = %resolved.path.display(),
        source = %resolved.source,
        "resolved interpreter"
    );

    Ok(PreparedRestart {
        request: InvocationRequest {
            environment,
            interpreter: resolved.path,
            entrypoint: base_dir.join(&config.manager.entrypoint),
        },
        interpreter_source: resolved.source,
        env,
    })
}

/// Run the manager once and wait for it.
///
/// # Errors
///
/// Returns an error if the manager cannot be spawned. Its exit status,
/// whatever it is, is returned as `Ok`.
pub async fn delegate(runner: &impl CommandRunner, prepared: &PreparedRestart) -> Result<ExitStatus> {
    let request = &prepared.request;
    tracing::info!(command = %request.command_line(), "delegating to manager");

    let status = runner
        .run_status(&request.interpreter, &request.interpreter_args(), &prepared.env)
        .await
        .with_context(|| format!("running {}", request.interpreter.display()))?;
    tracing::debug!(%status, "manager exited");
    Ok(status)
}

/// The dispatcher exit status that mirrors the manager's.
///
/// Signal deaths map to `128 + signal` as a shell would report them.
#[must_use]
pub fn exit_status(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code & 0xff).unwrap_or(1);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from((128 + signal) & 0xff).unwrap_or(1);
        }
    }
    1
}
