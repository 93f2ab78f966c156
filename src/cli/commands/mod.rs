//! CLI command implementations.

pub mod config;
pub mod rename;
pub mod rules;
