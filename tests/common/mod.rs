//! Common test utilities for doe CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated source / destination / config directories
//! - Fixtures: machine export layouts

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
