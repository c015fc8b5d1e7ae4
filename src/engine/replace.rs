//! Single, first-match replacement.

use super::{EngineError, TextEngine, compile_pattern};
use std::ops::Range;

/// What a successful replace changed.
///
/// Spans are byte ranges: `matched_span` into the text before the replace,
/// `replacement_span` into the text after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceResult {
    pub matched_text: String,
    pub matched_span: Range<usize>,
    pub replacement_text: String,
    pub replacement_span: Range<usize>,
}

impl TextEngine {
    /// Replace the leftmost case-insensitive match of `pattern` with the
    /// string `build_replacement` returns for the matched text.
    ///
    /// Only the first match is replaced; later occurrences are left as they
    /// are. On any error the text is unchanged.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidPattern`] if `pattern` does not compile
    /// - [`EngineError::NoMatch`] if nothing matches, including when the
    ///   text is empty
    pub fn replace_first_match<F>(
        &mut self,
        pattern: &str,
        build_replacement: F,
    ) -> Result<ReplaceResult, EngineError>
    where
        F: FnOnce(&str) -> String,
    {
        let regex = compile_pattern(pattern).map_err(|source| EngineError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let no_match = || EngineError::NoMatch {
            pattern: pattern.to_string(),
        };
        if self.original_text.is_empty() {
            return Err(no_match());
        }

        let (matched_span, matched_text) = {
            let found = regex.find(&self.original_text).ok_or_else(no_match)?;
            (found.range(), found.as_str().to_string())
        };

        let replacement_text = build_replacement(&matched_text);
        log::info!(
            "Replacing {:?} at bytes {}..{} with {:?}",
            matched_text,
            matched_span.start,
            matched_span.end,
            replacement_text
        );

        self.original_text
            .replace_range(matched_span.clone(), &replacement_text);
        let replacement_span = matched_span.start..matched_span.start + replacement_text.len();

        Ok(ReplaceResult {
            matched_text,
            matched_span,
            replacement_text,
            replacement_span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ib_tweaker_config::{FONT_TAG_PATTERN, PatternSet};

    const NEW_TAG: &str = r#"<font key="font" size="18" name="Helvetica"/>"#;

    fn engine(text: &str) -> TextEngine {
        TextEngine::with_text(PatternSet::default(), text)
    }

    #[test]
    fn test_greedy_match_spans_tags_on_one_line() {
        let text = r#"<font key="font" size="12"/> other <font key="font" size="12"/>"#;
        let mut engine = engine(text);

        let result = engine
            .replace_first_match(r#"<font key="font" (metaFont="|size=")(.+)>"#, |_| {
                NEW_TAG.to_string()
            })
            .unwrap();

        // `.+` is greedy and the two tags share a line, so the match runs to the last '>'.
        assert_eq!(result.matched_span, 0..text.len());
        assert_eq!(engine.text(), NEW_TAG);
    }

    #[test]
    fn test_replaces_first_tag_on_separate_lines() {
        let text = "<font key=\"font\" size=\"12\"/>\n<font key=\"font\" metaFont=\"system\"/>\n";
        let mut engine = engine(text);

        let result = engine
            .replace_first_match(FONT_TAG_PATTERN, |_| NEW_TAG.to_string())
            .unwrap();

        assert_eq!(result.matched_text, r#"<font key="font" size="12"/>"#);
        assert_eq!(result.matched_span, 0..28);
        assert_eq!(result.replacement_text, NEW_TAG);
        assert_eq!(result.replacement_span, 0..NEW_TAG.len());
        assert_eq!(
            engine.text(),
            format!("{NEW_TAG}\n<font key=\"font\" metaFont=\"system\"/>\n")
        );
    }

    #[test]
    fn test_builder_receives_matched_text() {
        let mut engine = engine("size: 12pt, size: 14pt");
        let result = engine
            .replace_first_match(r"\d+pt", |m| format!("[{m}]"))
            .unwrap();
        assert_eq!(result.matched_text, "12pt");
        assert_eq!(result.replacement_span, 6..12);
        assert_eq!(engine.text(), "size: [12pt], size: 14pt");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let mut engine = engine(r#"<FONT KEY="font" SIZE="9"/>"#);
        assert!(
            engine
                .replace_first_match(FONT_TAG_PATTERN, |_| NEW_TAG.to_string())
                .is_ok()
        );
        assert_eq!(engine.text(), NEW_TAG);
    }

    #[test]
    fn test_no_match_leaves_text_unchanged() {
        let text = "<label text=\"hi\"/>";
        let mut engine = engine(text);
        let err = engine
            .replace_first_match(FONT_TAG_PATTERN, |_| NEW_TAG.to_string())
            .unwrap_err();
        assert!(matches!(err, EngineError::NoMatch { .. }));
        assert_eq!(engine.text(), text);
    }

    #[test]
    fn test_empty_text_is_no_match() {
        let mut engine = engine("");
        let err = engine.replace_first_match("x*", |_| "y".to_string()).unwrap_err();
        assert!(matches!(err, EngineError::NoMatch { .. }));
        assert_eq!(engine.text(), "");
    }

    #[test]
    fn test_invalid_pattern_leaves_text_unchanged() {
        let mut engine = engine("<font key=\"font\" size=\"12\"/>");
        let err = engine
            .replace_first_match("<font(", |_| unreachable!("builder must not run"))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidPattern { .. }));
        assert_eq!(engine.text(), "<font key=\"font\" size=\"12\"/>");
    }

    #[test]
    fn test_replacement_is_not_reapplied() {
        // The replacement itself matches the pattern; it must not be replaced again.
        let mut engine = engine("a a");
        engine.replace_first_match("a", |_| "aa".to_string()).unwrap();
        assert_eq!(engine.text(), "aa a");
    }

    #[test]
    fn test_multibyte_text_around_match() {
        let mut engine = engine("é <font key=\"font\" size=\"1\"/> ü");
        let result = engine
            .replace_first_match(FONT_TAG_PATTERN, |_| "<f/>".to_string())
            .unwrap();
        assert_eq!(result.matched_span.start, "é ".len());
        assert_eq!(engine.text(), "é <f/> ü");
    }
}
