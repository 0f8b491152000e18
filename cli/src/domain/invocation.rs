//! The delegated manager command line.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::domain::environment::EnvironmentName;

/// Subcommand passed to the manager.
pub const TARGET_COMMAND: &str = "restart";

/// User/group pair the manager drops privileges to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user: &'static str,
    pub group: &'static str,
}

/// The service identity. Not configurable.
pub const IDENTITY: Identity = Identity {
    user: "tr",
    group: "tr",
};

/// Everything needed to run the manager once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub environment: EnvironmentName,
    pub interpreter: PathBuf,
    pub entrypoint: PathBuf,
}

impl InvocationRequest {
    /// Arguments after the entry point:
    /// `--env <environment> restart --user tr --group tr`.
    #[must_use]
    pub fn manager_args(&self) -> Vec<OsString> {
        vec![
            OsString::from("--env"),
            self.environment.as_os_str().to_os_string(),
            OsString::from(TARGET_COMMAND),
            OsString::from("--user"),
            OsString::from(IDENTITY.user),
            OsString::from("--group"),
            OsString::from(IDENTITY.group),
        ]
    }

    /// Arguments handed to the interpreter: entry point first.
    #[must_use]
    pub fn interpreter_args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(8);
        args.push(self.entrypoint.clone().into_os_string());
        args.extend(self.manager_args());
        args
    }

    /// Human-readable command line, for logs and `--dry-run`.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut parts = vec![
            self.interpreter.display().to_string(),
            self.entrypoint.display().to_string(),
        ];
        parts.extend(
            self.manager_args()
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned()),
        );
        parts.join(" ")
    }
}
