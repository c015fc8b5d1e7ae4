//! Configuration system for ib-tweaker.
//!
//! This crate provides configuration loading, saving, and default values
//! for the storyboard font tool. It includes:
//!
//! - The filter catalog (`FilterRule`, `FilterDefinition`, `PatternSet`)
//! - The `Config` struct with YAML persistence
//! - Typed config errors

pub mod config;
pub mod defaults;
pub mod error;
pub mod filters;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use filters::{
    FONT_TAG_PATTERN, FilterDefinition, FilterNotFound, FilterRule, PatternSet,
    default_filter_rules,
};
pub use types::LogLevel;
