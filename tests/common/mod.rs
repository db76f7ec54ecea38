//! Common test utilities for scratchwipe integration tests.
//!
//! This module provides:
//! - `FaultyFs`: a filesystem that refuses, stalls, or panics on chosen paths
//! - Tree builders for populating scratch directories
//! - `TestEnv`: isolated environment for running the CLI binary

#![allow(dead_code)]

pub mod env;
pub mod faulty_fs;
pub mod tree;

pub use env::*;
pub use faulty_fs::*;
pub use tree::*;
