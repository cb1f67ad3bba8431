//! Shared utilities for the aep-rs CLI

pub mod table;
pub mod tree;

pub use table::*;
pub use tree::*;
