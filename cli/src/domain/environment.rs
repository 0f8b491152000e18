//! Deployment environments the manager knows about.

use std::ffi::{OsStr, OsString};
use std::fmt;

/// Environment tokens shown in the usage message.
pub const DOCUMENTED_ENVIRONMENTS: [&str; 4] = ["localdev", "integration", "staging", "prod"];

/// A documented deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Localdev,
    Integration,
    Staging,
    Prod,
}

impl Environment {
    /// All documented environments, in usage order.
    pub const ALL: [Environment; 4] = [
        Environment::Localdev,
        Environment::Integration,
        Environment::Staging,
        Environment::Prod,
    ];

    /// The token passed to the manager for this environment.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Localdev => "localdev",
            Environment::Integration => "integration",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The environment argument exactly as the caller typed it.
///
/// Nothing is rejected here, not even non-UTF-8 bytes: the manager owns
/// validation, so unknown names are forwarded untouched.
/// [`EnvironmentName::known`] lets callers notice (and log) a name outside
/// the documented set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentName(OsString);

impl EnvironmentName {
    #[must_use]
    pub fn new(name: impl Into<OsString>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// The documented environment this name refers to, if any.
    #[must_use]
    pub fn known(&self) -> Option<Environment> {
        let name = self.0.to_str()?;
        Environment::ALL.into_iter().find(|env| env.as_str() == name)
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_string_lossy())
    }
}
