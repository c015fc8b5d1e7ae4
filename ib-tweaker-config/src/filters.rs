//! Filter catalog types and defaults.
//!
//! A filter pairs a display label with a regular expression. The configured
//! list of [`FilterRule`]s is turned into a [`PatternSet`] at startup, which
//! assigns each entry a stable, dense index equal to its list position.

use serde::{Deserialize, Serialize};

/// Pattern matching a storyboard `<font key="font" .../>` declaration that
/// carries either a `metaFont` or an explicit `size` attribute.
pub const FONT_TAG_PATTERN: &str = r#"<font\skey="font"\s(metaFont="|size=")(.+)>"#;

/// A filter as written in the config file.
///
/// The position of the rule in the `filters` list determines its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    /// Human-readable name shown next to the filter toggle (e.g. "FONTS")
    pub label: String,
    /// Regular expression source; compiled case-insensitively
    pub pattern: String,
}

impl FilterRule {
    /// Create a new filter rule
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }
}

/// Get the built-in filter rules
pub fn default_filter_rules() -> Vec<FilterRule> {
    vec![FilterRule::new("FONTS", FONT_TAG_PATTERN)]
}

/// A filter with its stable display position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterDefinition {
    /// Display ordinal, unique and dense from 0
    pub index: usize,
    /// Human-readable name
    pub label: String,
    /// Regular expression source
    pub pattern: String,
}

/// Returned when a filter index is outside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no filter at index {index} (catalog has {len} filters)")]
pub struct FilterNotFound {
    /// The requested index
    pub index: usize,
    /// Number of filters in the catalog
    pub len: usize,
}

/// Immutable, ordered catalog of filter definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    definitions: Vec<FilterDefinition>,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::from_rules(&default_filter_rules())
    }
}

impl PatternSet {
    /// Build a catalog from configured rules, indexing them by position.
    pub fn from_rules(rules: &[FilterRule]) -> Self {
        let definitions = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| FilterDefinition {
                index,
                label: rule.label.clone(),
                pattern: rule.pattern.clone(),
            })
            .collect();
        Self { definitions }
    }

    /// All definitions in ascending index order.
    pub fn definitions(&self) -> &[FilterDefinition] {
        &self.definitions
    }

    /// Look up a definition by index.
    pub fn definition(&self, index: usize) -> Result<&FilterDefinition, FilterNotFound> {
        self.definitions.get(index).ok_or(FilterNotFound {
            index,
            len: self.definitions.len(),
        })
    }

    /// Look up a definition by label, ignoring ASCII case.
    pub fn find_by_label(&self, label: &str) -> Option<&FilterDefinition> {
        self.definitions
            .iter()
            .find(|d| d.label.eq_ignore_ascii_case(label))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_fonts_filter() {
        let set = PatternSet::default();
        assert_eq!(set.len(), 1);
        let fonts = set.definition(0).expect("FONTS filter");
        assert_eq!(fonts.label, "FONTS");
        assert_eq!(fonts.pattern, FONT_TAG_PATTERN);
    }

    #[test]
    fn test_indices_follow_rule_order() {
        let set = PatternSet::from_rules(&[
            FilterRule::new("FONTS", FONT_TAG_PATTERN),
            FilterRule::new("COLORS", r"<color\s[^>]*>"),
            FilterRule::new("IMAGES", r#"image="[^"]*""#),
        ]);

        let indices: Vec<usize> = set.definitions().iter().map(|d| d.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(set.definition(2).unwrap().label, "IMAGES");
    }

    #[test]
    fn test_definition_out_of_range() {
        let set = PatternSet::default();
        let err = set.definition(5).unwrap_err();
        assert_eq!(err, FilterNotFound { index: 5, len: 1 });
        assert_eq!(
            err.to_string(),
            "no filter at index 5 (catalog has 1 filters)"
        );
    }

    #[test]
    fn test_find_by_label_ignores_case() {
        let set = PatternSet::default();
        assert_eq!(set.find_by_label("fonts").map(|d| d.index), Some(0));
        assert!(set.find_by_label("colors").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let set = PatternSet::from_rules(&[]);
        assert!(set.is_empty());
        assert!(set.definition(0).is_err());
    }
}
