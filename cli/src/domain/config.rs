//! Dispatcher configuration schema.
//!
//! Pure types only — loading lives in `crate::infra::config`.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Contents of `restart.yaml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatcherConfig {
    /// Profile sourced before the manager runs.
    pub profile: PathBuf,
    /// Interpreter lookup.
    pub interpreter: InterpreterConfig,
    /// Manager entry point.
    pub manager: ManagerConfig,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            profile: PathBuf::from("/opt/tr/etc/profile"),
            interpreter: InterpreterConfig::default(),
            manager: ManagerConfig::default(),
        }
    }
}

/// Where to find the interpreter that runs the manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpreterConfig {
    /// Vendored interpreter directory, relative to the dispatcher's directory.
    pub override_dir: PathBuf,
    /// Interpreter binary, relative to `override_dir`.
    pub binary: PathBuf,
    /// System interpreter, looked up on `PATH` unless it contains a `/`.
    pub default: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            override_dir: PathBuf::from("python"),
            binary: PathBuf::from("bin/python"),
            default: "python".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManagerConfig {
    /// Manager script, relative to the dispatcher's directory.
    pub entrypoint: PathBuf,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            entrypoint: PathBuf::from("manager.py"),
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or `ARCHIVESVC_RESTART_CONFIG`.
    Explicit(PathBuf),
    /// `restart.yaml` next to the dispatcher.
    Adjacent(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Adjacent(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: DispatcherConfig,
    pub source: ConfigSource,
}
