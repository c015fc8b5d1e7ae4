//! An editing session over one storyboard document.
//!
//! `Session` is what a front end (the CLI here) drives. It owns the text
//! engine and the document's save location, and turns the open / pick font /
//! save flow into explicit calls. Failed calls leave the session as it was.

use crate::document;
use crate::engine::{EngineError, ReplaceResult, TextEngine};
use ib_tweaker_config::{Config, PatternSet};
use ib_tweaker_fonts::FontSelection;
use std::path::{Path, PathBuf};

pub struct Session {
    engine: TextEngine,
    /// Where `save` writes; set by the last successful `open`
    save_path: Option<PathBuf>,
    /// A replace happened since the last open or save
    unsaved_changes: bool,
    /// Refuse to write empty text unless the caller allows it
    confirm_empty_save: bool,
}

impl Session {
    pub fn new(patterns: PatternSet, confirm_empty_save: bool) -> Self {
        Self {
            engine: TextEngine::new(patterns),
            save_path: None,
            unsaved_changes: false,
            confirm_empty_save,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pattern_set(), config.confirm_empty_save)
    }

    /// Open `path`, replacing the current text and clearing the filter
    /// selection. Returns the text to display.
    ///
    /// Unsaved replacements in the previous document are discarded.
    pub fn open(&mut self, path: &Path) -> Result<String, EngineError> {
        let text = document::read_text(path)?;

        if self.unsaved_changes
            && let Some(previous) = &self.save_path
        {
            log::warn!("Discarding unsaved changes to {:?}", previous);
        }

        self.engine.load_text(text);
        self.save_path = Some(path.to_path_buf());
        self.unsaved_changes = false;
        log::info!("Opened {:?}", path);
        Ok(self.engine.display())
    }

    /// Replace the first font declaration matching `font_tag_pattern` with
    /// the tag for `selection`.
    pub fn apply_font(
        &mut self,
        font_tag_pattern: &str,
        selection: &FontSelection,
    ) -> Result<ReplaceResult, EngineError> {
        let tag = selection.to_font_tag();
        let result = self
            .engine
            .replace_first_match(font_tag_pattern, |_| tag)?;
        self.unsaved_changes = true;
        Ok(result)
    }

    /// Write the text back to the file it was opened from.
    pub fn save(&mut self, allow_empty: bool) -> Result<PathBuf, EngineError> {
        let path = self.save_path.clone().ok_or(EngineError::NoDocument)?;
        self.write_to(&path, allow_empty)?;
        Ok(path)
    }

    /// Write the text to `path`, which becomes the new save location.
    pub fn save_as(&mut self, path: &Path, allow_empty: bool) -> Result<(), EngineError> {
        if self.save_path.is_none() {
            return Err(EngineError::NoDocument);
        }
        self.write_to(path, allow_empty)?;
        self.save_path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&mut self, path: &Path, allow_empty: bool) -> Result<(), EngineError> {
        if self.engine.text().is_empty() && self.confirm_empty_save && !allow_empty {
            return Err(EngineError::EmptySave {
                path: path.to_path_buf(),
            });
        }
        document::write_text(path, self.engine.text())?;
        self.unsaved_changes = false;
        Ok(())
    }

    /// The text to display for the current filter selection.
    pub fn display(&self) -> String {
        self.engine.display()
    }

    pub fn engine(&self) -> &TextEngine {
        &self.engine
    }

    /// Mutable access for filter selection.
    pub fn engine_mut(&mut self) -> &mut TextEngine {
        &mut self.engine
    }

    pub fn save_path(&self) -> Option<&Path> {
        self.save_path.as_deref()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }
}
