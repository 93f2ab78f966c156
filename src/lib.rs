//! Media Utilities Library
//!
//! A library for renaming media files into a standardized naming scheme.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
