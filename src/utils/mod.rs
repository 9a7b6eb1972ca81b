//! Utility modules for common functionality
//!
//! Logging, configuration, progress reporting and number rendering.

pub mod logger;
pub mod config;
pub mod progress;
pub(crate) mod format_utils;
