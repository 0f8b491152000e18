//! Domain layer — pure types and rules for a restart dispatch.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod environment;
pub mod error;
pub mod invocation;
pub mod profile;
pub mod usage;

pub use config::{ConfigSource, DispatcherConfig, InterpreterConfig, LoadedConfig, ManagerConfig};
pub use environment::{DOCUMENTED_ENVIRONMENTS, Environment, EnvironmentName};
pub use error::{DispatchError, ProfileError};
pub use invocation::{IDENTITY, Identity, InvocationRequest, TARGET_COMMAND};
pub use profile::ActivatedEnv;
