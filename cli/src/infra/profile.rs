//! Profile activation by sourcing the profile in `sh`.

use std::path::Path;
use std::process::Stdio;

use anyhow::{Context, Result, bail};

use crate::application::ports::ProfileActivator;
use crate::domain::ActivatedEnv;

/// Sources the profile, then dumps the resulting environment with `env -0`.
/// Anything the profile prints goes to our stderr.
const ACTIVATE_SCRIPT: &str = r#". "$1" 1>&2 && exec env -0"#;

const SHELL: &str = "/bin/sh";

/// Production `ProfileActivator` backed by a POSIX shell.
pub struct ShellProfileActivator;

impl ProfileActivator for ShellProfileActivator {
    async fn activate(&self, profile: &Path) -> Result<ActivatedEnv> {
        if !profile.is_file() {
            bail!("{} does not exist", profile.display());
        }
        // `.` searches PATH for names without a slash.
        let profile = std::path::absolute(profile)
            .with_context(|| format!("resolving {}", profile.display()))?;

        let output = tokio::process::Command::new(SHELL)
            .arg("-c")
            .arg(ACTIVATE_SCRIPT)
            .arg("sh")
            .arg(&profile)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .with_context(|| format!("failed to spawn {SHELL}"))?;

        if !output.status.success() {
            bail!("sourcing failed ({})", output.status);
        }
        ActivatedEnv::from_nul_separated(&output.stdout).context("reading activated environment")
    }
}
