//! Interpreter resolution: vendored override first, system default second.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::application::ports::PathProbe;
use crate::domain::InterpreterConfig;

/// Which rule picked the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterSource {
    /// The override directory next to the dispatcher exists.
    LocalOverride,
    /// Fell back to the system interpreter.
    SystemDefault,
}

impl fmt::Display for InterpreterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpreterSource::LocalOverride => f.write_str("local override"),
            InterpreterSource::SystemDefault => f.write_str("system default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInterpreter {
    pub path: PathBuf,
    pub source: InterpreterSource,
}

/// Pick the interpreter for a dispatcher living in `base_dir`.
///
/// The override directory is only checked for existence; the binary inside
/// it is not, so a broken vendored install fails at spawn time. A bare
/// default name is searched in `path_var`, the activated `PATH`.
///
/// # Errors
///
/// Returns an error if the override is absent and the system default
/// cannot be found.
pub fn resolve(
    probe: &impl PathProbe,
    base_dir: &Path,
    config: &InterpreterConfig,
    path_var: Option<&str>,
) -> Result<ResolvedInterpreter> {
    let override_dir = base_dir.join(&config.override_dir);
    if probe.exists(&override_dir) {
        return Ok(ResolvedInterpreter {
            path: override_dir.join(&config.binary),
            source: InterpreterSource::LocalOverride,
        });
    }

    let path = system_default(probe, &config.default, path_var)?;
    Ok(ResolvedInterpreter {
        path,
        source: InterpreterSource::SystemDefault,
    })
}

fn system_default(probe: &impl PathProbe, name: &str, path_var: Option<&str>) -> Result<PathBuf> {
    if name.is_empty() {
        bail!("no default interpreter configured");
    }
    if name.contains('/') {
        let path = PathBuf::from(name);
        if probe.exists(&path) {
            return Ok(path);
        }
        bail!("default interpreter {name} does not exist");
    }
    let Some(path_var) = path_var else {
        bail!("activated environment has no PATH to search for `{name}`");
    };
    match probe.search_path(name, path_var) {
        Some(path) => Ok(path),
        None => bail!("default interpreter `{name}` not found on PATH {path_var}"),
    }
}
