//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::cli`, or `crate::output`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::{ActivatedEnv, LoadedConfig};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` with inherited stdio and exactly the variables in `env`,
    /// and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    /// A non-zero exit is not an error.
    async fn run_status(
        &self,
        program: &Path,
        args: &[OsString],
        env: &ActivatedEnv,
    ) -> Result<ExitStatus>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Read-only filesystem queries used during interpreter resolution.
pub trait PathProbe {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// First executable named `name` in the directories of `path_var`,
    /// a `PATH`-style list.
    fn search_path(&self, name: &str, path_var: &str) -> Option<PathBuf>;
}

// ── Profile Port ──────────────────────────────────────────────────────────────

/// Activates an external profile and reports the environment it produces.
#[allow(async_fn_in_trait)]
pub trait ProfileActivator {
    /// # Errors
    ///
    /// Returns an error if the profile is missing or fails to source.
    async fn activate(&self, profile: &Path) -> Result<ActivatedEnv>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Loads the dispatcher configuration.
pub trait ConfigStore {
    /// # Errors
    ///
    /// Returns an error if a named config file is missing or malformed.
    fn load(&self) -> Result<LoadedConfig>;
}
