//! Shared port doubles for unit tests.
//!
//! Provides canned [`PathProbe`], [`ProfileActivator`] and [`CommandRunner`]
//! implementations so each test file doesn't re-define the same boilerplate.

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::ffi::OsString;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;
use archivesvc_restart::application::{CommandRunner, PathProbe, ProfileActivator};
use archivesvc_restart::domain::ActivatedEnv;

// ── Filesystem ────────────────────────────────────────────────────────────────

/// In-memory filesystem: a set of existing paths. `PATH` searches walk the
/// given list against the same set.
#[derive(Default)]
pub struct FakeFs {
    existing: HashSet<PathBuf>,
}

impl FakeFs {
    #[must_use]
    pub fn with_existing(mut self, path: impl Into<PathBuf>) -> Self {
        self.existing.insert(path.into());
        self
    }
}

impl PathProbe for FakeFs {
    fn exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }

    fn search_path(&self, name: &str, path_var: &str) -> Option<PathBuf> {
        path_var
            .split(':')
            .map(|dir| Path::new(dir).join(name))
            .find(|candidate| self.existing.contains(candidate))
    }
}

// ── Profile ───────────────────────────────────────────────────────────────────

const SYSTEM_PATH: &str = "/usr/local/bin:/usr/bin:/bin";

/// Activates to a fixed environment and records which profile was asked for.
pub struct StubActivator {
    env: Option<ActivatedEnv>,
    pub requested: RefCell<Vec<PathBuf>>,
}

impl StubActivator {
    /// Activates to `vars` plus a plain system `PATH` unless `vars` sets one.
    pub fn ok(vars: &[(&str, &str)]) -> Self {
        let env = std::iter::once(("PATH", SYSTEM_PATH))
            .chain(vars.iter().copied())
            .collect();
        Self {
            env: Some(env),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Activates to exactly `vars`.
    pub fn exactly(vars: &[(&str, &str)]) -> Self {
        Self {
            env: Some(vars.iter().copied().collect()),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn missing() -> Self {
        Self {
            env: None,
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl ProfileActivator for StubActivator {
    async fn activate(&self, profile: &Path) -> Result<ActivatedEnv> {
        self.requested.borrow_mut().push(profile.to_path_buf());
        match &self.env {
            Some(env) => Ok(env.clone()),
            None => anyhow::bail!("{} does not exist", profile.display()),
        }
    }
}

// ── Command runner ────────────────────────────────────────────────────────────

/// One recorded `run_status` call.
#[derive(Debug, Clone)]
pub struct RecordedRun {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: ActivatedEnv,
}

/// Records every invocation and answers with a fixed wait status.
pub struct RecordingRunner {
    raw_status: i32,
    spawn_fails: bool,
    pub calls: RefCell<Vec<RecordedRun>>,
}

impl RecordingRunner {
    /// Child exits normally with `code`.
    pub fn exiting(code: i32) -> Self {
        Self {
            raw_status: code << 8,
            spawn_fails: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Child dies from `signal`.
    pub fn killed_by(signal: i32) -> Self {
        Self {
            raw_status: signal,
            spawn_fails: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn unspawnable() -> Self {
        Self {
            raw_status: 0,
            spawn_fails: true,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    async fn run_status(
        &self,
        program: &Path,
        args: &[OsString],
        env: &ActivatedEnv,
    ) -> Result<ExitStatus> {
        self.calls.borrow_mut().push(RecordedRun {
            program: program.to_path_buf(),
            args: args
                .iter()
                .map(|a| a.to_str().expect("utf-8 arg").to_string())
                .collect(),
            env: env.clone(),
        });
        if self.spawn_fails {
            anyhow::bail!("No such file or directory (os error 2)");
        }
        Ok(ExitStatus::from_raw(self.raw_status))
    }
}
