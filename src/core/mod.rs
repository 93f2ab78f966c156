//! Core business logic modules.

pub mod classifier;
pub mod metadata;
pub mod renderer;
pub mod ruleset;
pub mod scanner;
pub mod template;
