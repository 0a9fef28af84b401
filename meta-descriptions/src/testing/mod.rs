//! Testing utilities for meta description builds.
//!
//! This module provides:
//! - A build harness that drives pages through the lifecycle hooks
//! - Assertions for page descriptions and export files

mod assertions;
mod fixtures;

pub use assertions::{assert_description, assert_export_rows, read_export};
pub use fixtures::{BuildRun, TestBuild, TestPage};
