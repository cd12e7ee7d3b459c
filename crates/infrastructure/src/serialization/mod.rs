//! Serialization helpers for configuration files and rendered output.
//!
//! JSON output is deterministic: 2-space indentation, declaration-ordered
//! fields and a trailing newline.

mod json;

pub use json::*;
