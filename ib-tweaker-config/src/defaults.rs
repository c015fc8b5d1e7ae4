//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields.

use crate::filters::{FONT_TAG_PATTERN, FilterRule, default_filter_rules};
use crate::types::LogLevel;

pub fn filters() -> Vec<FilterRule> {
    default_filter_rules()
}

pub fn font_tag_pattern() -> String {
    FONT_TAG_PATTERN.to_string()
}

pub fn font_size() -> f32 {
    12.0
}

pub fn log_level() -> LogLevel {
    LogLevel::Warn
}

pub fn bool_true() -> bool {
    true
}
