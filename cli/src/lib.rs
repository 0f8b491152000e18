//! archivesvc restart dispatcher library — exposes modules for integration testing.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod application;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod output;
