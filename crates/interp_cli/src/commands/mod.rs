//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod algorithms;
pub mod eval;
pub mod required_points;
