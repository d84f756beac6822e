//! Configuration model for postsmith.
//!
//! This module defines the Config struct that represents `topics.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for missing fields, validation of config values, and
//! writing a default file on first run.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::{EndpointSettings, PostSettings, Schedule};
