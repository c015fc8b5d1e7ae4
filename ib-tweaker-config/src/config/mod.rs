//! The `Config` struct and its validation.
//!
//! Persistence (load/save, path resolution) lives in [`persistence`].

mod persistence;

use crate::error::ConfigError;
use crate::filters::{FilterRule, PatternSet};
use crate::types::LogLevel;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Top-level configuration, stored as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Filter catalog, in display order
    #[serde(default = "crate::defaults::filters")]
    pub filters: Vec<FilterRule>,

    /// Pattern locating the font declaration that `set-font` replaces
    #[serde(default = "crate::defaults::font_tag_pattern")]
    pub font_tag_pattern: String,

    /// Point size used when no size is given on the command line
    #[serde(default = "crate::defaults::font_size")]
    pub default_font_size: f32,

    /// Diagnostic log level
    #[serde(default = "crate::defaults::log_level")]
    pub log_level: LogLevel,

    /// Omit fonts whose name starts with '.' (system-private faces) from font listings
    #[serde(default = "crate::defaults::bool_true")]
    pub hide_dot_fonts: bool,

    /// Refuse to overwrite a file with empty text unless explicitly allowed
    #[serde(default = "crate::defaults::bool_true")]
    pub confirm_empty_save: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filters: crate::defaults::filters(),
            font_tag_pattern: crate::defaults::font_tag_pattern(),
            default_font_size: crate::defaults::font_size(),
            log_level: crate::defaults::log_level(),
            hide_dot_fonts: crate::defaults::bool_true(),
            confirm_empty_save: crate::defaults::bool_true(),
        }
    }
}

impl Config {
    /// Build the immutable filter catalog from the configured rules.
    pub fn pattern_set(&self) -> PatternSet {
        PatternSet::from_rules(&self.filters)
    }

    /// Check field values that serde cannot.
    ///
    /// Filter patterns that fail to compile are only warned about: rendering
    /// skips them. The font tag pattern must compile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = RegexBuilder::new(&self.font_tag_pattern)
            .case_insensitive(true)
            .build()
        {
            return Err(ConfigError::InvalidField {
                field: "font_tag_pattern",
                reason: format!("pattern does not compile: {e}"),
            });
        }

        if !(self.default_font_size.is_finite() && self.default_font_size > 0.0) {
            return Err(ConfigError::InvalidField {
                field: "default_font_size",
                reason: format!("must be a positive number, got {}", self.default_font_size),
            });
        }

        let mut seen = HashSet::new();
        for (index, rule) in self.filters.iter().enumerate() {
            let label = rule.label.trim();
            if label.is_empty() {
                return Err(ConfigError::InvalidFilter {
                    index,
                    label: rule.label.clone(),
                    reason: "label is empty".to_string(),
                });
            }
            if !seen.insert(label.to_ascii_lowercase()) {
                return Err(ConfigError::InvalidFilter {
                    index,
                    label: label.to_string(),
                    reason: "label is already used by an earlier filter".to_string(),
                });
            }
            if let Err(e) = RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()
            {
                log::warn!(
                    "Filter '{}' has a pattern that does not compile and will be skipped: {}",
                    rule.label,
                    e
                );
            }
        }

        Ok(())
    }
}
