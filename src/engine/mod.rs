//! Filter-and-replace text engine.
//!
//! `TextEngine` owns the unfiltered document text and the set of selected
//! filters. Two operations act on it:
//!
//! - [`TextEngine::replace_first_match`] rewrites the leftmost match of a
//!   pattern and adopts the result as the new text.
//! - [`TextEngine::render_filtered`] derives a display string listing only
//!   the matches of the selected filters. It never mutates the text.
//!
//! The displayed text is always recomputed from `(text, selection, catalog)`;
//! nothing derived is stored.

mod error;
mod render;
mod replace;

pub use error::EngineError;
pub use replace::ReplaceResult;

use ib_tweaker_config::{FilterDefinition, PatternSet};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// Where the engine sits in its load/filter cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No text has been loaded yet
    Empty,
    /// Text loaded, no filter selected; display is the full text
    Loaded,
    /// At least one filter selected; display is the filtered matches
    Filtered,
}

/// Holder of the source text and the current filter selection.
#[derive(Debug, Clone)]
pub struct TextEngine {
    patterns: PatternSet,
    original_text: String,
    selected: BTreeSet<usize>,
    loaded: bool,
}

impl TextEngine {
    /// Create an engine with no text, using `patterns` as the filter catalog.
    pub fn new(patterns: PatternSet) -> Self {
        Self {
            patterns,
            original_text: String::new(),
            selected: BTreeSet::new(),
            loaded: false,
        }
    }

    /// Create an engine already holding `text`.
    pub fn with_text(patterns: PatternSet, text: impl Into<String>) -> Self {
        let mut engine = Self::new(patterns);
        engine.load_text(text);
        engine
    }

    /// Replace the text wholesale and clear the filter selection.
    pub fn load_text(&mut self, text: impl Into<String>) {
        self.original_text = text.into();
        self.selected.clear();
        self.loaded = true;
        log::debug!("Loaded {} bytes of text", self.original_text.len());
    }

    /// The unfiltered text.
    pub fn text(&self) -> &str {
        &self.original_text
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn state(&self) -> EngineState {
        if !self.loaded {
            EngineState::Empty
        } else if self.selected.is_empty() {
            EngineState::Loaded
        } else {
            EngineState::Filtered
        }
    }

    /// Mark the filter at `index` as selected.
    pub fn select_filter(&mut self, index: usize) -> Result<(), EngineError> {
        self.patterns.definition(index)?;
        self.selected.insert(index);
        Ok(())
    }

    /// Unselect the filter at `index`. Unselecting an unselected filter is a no-op.
    pub fn deselect_filter(&mut self, index: usize) -> Result<(), EngineError> {
        self.patterns.definition(index)?;
        self.selected.remove(&index);
        Ok(())
    }

    /// Flip the filter at `index`, returning whether it is now selected.
    pub fn toggle_filter(&mut self, index: usize) -> Result<bool, EngineError> {
        self.patterns.definition(index)?;
        if self.selected.remove(&index) {
            Ok(false)
        } else {
            self.selected.insert(index);
            Ok(true)
        }
    }

    pub fn clear_filters(&mut self) {
        self.selected.clear();
    }

    /// Selected filter indices in ascending order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Selected filter definitions in ascending index order.
    pub fn selected_definitions(&self) -> Vec<&FilterDefinition> {
        self.selected
            .iter()
            .filter_map(|&index| self.patterns.definition(index).ok())
            .collect()
    }

    /// The text to show for the current selection.
    pub fn display(&self) -> String {
        self.render_filtered(self.selected_definitions())
    }
}

/// Compile `pattern` with the engine's matching rules (case-insensitive,
/// leftmost-first).
pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
