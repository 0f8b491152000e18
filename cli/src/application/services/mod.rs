//! Application services — use-case orchestration.
//!
//! Services import only from `crate::domain` and `crate::application::ports`.

pub mod interpreter;
pub mod restart;
