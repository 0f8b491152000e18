//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution,
//! filesystem access, profile activation, and config loading.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::cli` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod fs;
pub mod profile;
