//! A chosen font and the storyboard declaration it produces.

use crate::catalog::FontCatalog;
use thiserror::Error;

/// Errors raised while validating a font choice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FontError {
    /// The host font system does not know this name.
    #[error("font '{0}' is not installed")]
    UnknownFont(String),

    /// The point size is zero, negative, or not a number.
    #[error("invalid font size {0}: must be a positive number")]
    InvalidSize(f32),

    /// The font name is empty.
    #[error("font name is empty")]
    EmptyName,
}

/// A font name and point size chosen by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSelection {
    name: String,
    point_size: f32,
}

impl FontSelection {
    /// Create a selection without consulting the host font system.
    pub fn new(name: impl Into<String>, point_size: f32) -> Result<Self, FontError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(FontError::EmptyName);
        }
        if !(point_size.is_finite() && point_size > 0.0) {
            return Err(FontError::InvalidSize(point_size));
        }
        Ok(Self {
            name: trimmed.to_string(),
            point_size,
        })
    }

    /// Create a selection whose name must resolve in `catalog`.
    ///
    /// The stored name takes the catalog's spelling.
    pub fn resolve(
        name: &str,
        point_size: f32,
        catalog: &FontCatalog,
    ) -> Result<Self, FontError> {
        let selection = Self::new(name, point_size)?;
        let resolved = catalog
            .resolve(&selection.name)
            .ok_or_else(|| FontError::UnknownFont(selection.name.clone()))?;
        if resolved != selection.name {
            log::debug!("Resolved font '{}' to '{}'", selection.name, resolved);
        }
        Ok(Self {
            name: resolved.to_string(),
            ..selection
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Render the `<font .../>` declaration for this selection.
    ///
    /// Whole sizes print without a fractional part (`size="18"`).
    pub fn to_font_tag(&self) -> String {
        format!(
            r#"<font key="font" size="{}" name="{}"/>"#,
            self.point_size,
            escape_attribute(&self.name)
        )
    }
}

/// Escape the characters that would end or corrupt a double-quoted XML attribute.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
