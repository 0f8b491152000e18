//! Usage message rendering.

use std::ffi::OsStr;
use std::path::Path;

use crate::domain::environment::DOCUMENTED_ENVIRONMENTS;

/// Name used when `argv[0]` is missing or unusable.
pub const FALLBACK_PROGRAM: &str = "restart";

/// The program name to show in usage: the file name of `argv[0]`.
#[must_use]
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_PROGRAM.to_string())
}

/// `Usage: <program> <localdev|integration|staging|prod>`
#[must_use]
pub fn usage(program: &str) -> String {
    format!("Usage: {program} <{}>", DOCUMENTED_ENVIRONMENTS.join("|"))
}
