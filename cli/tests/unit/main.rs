//! Unit tests for the restart dispatcher
//!
//! These tests use mocked ports and run fast without spawning processes.

mod mocks;
mod property_tests;
