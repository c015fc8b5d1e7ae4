//! Filtered rendering of the engine text.

use super::{TextEngine, compile_pattern};
use ib_tweaker_config::FilterDefinition;

impl TextEngine {
    /// Build the display string for `selected` filters.
    ///
    /// With no filters the text is returned unchanged. Otherwise each filter,
    /// in the order given, contributes every match in the text (left to
    /// right), one per line. Matches from different filters are not
    /// interleaved. A filter whose pattern does not compile contributes
    /// nothing.
    pub fn render_filtered<'a, I>(&self, selected: I) -> String
    where
        I: IntoIterator<Item = &'a FilterDefinition>,
    {
        let mut selected = selected.into_iter().peekable();
        if selected.peek().is_none() {
            return self.original_text.clone();
        }

        let mut output = String::new();
        for definition in selected {
            let regex = match compile_pattern(&definition.pattern) {
                Ok(regex) => regex,
                Err(e) => {
                    log::warn!(
                        "Skipping filter '{}': pattern does not compile: {}",
                        definition.label,
                        e
                    );
                    continue;
                }
            };

            let mut count = 0usize;
            for found in regex.find_iter(&self.original_text) {
                output.push_str(found.as_str());
                output.push('\n');
                count += 1;
            }
            log::debug!("Filter '{}' matched {} times", definition.label, count);
        }
        output
    }
}
