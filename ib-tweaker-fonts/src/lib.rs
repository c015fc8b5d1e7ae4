//! Font discovery and font tag construction for ib-tweaker.
//!
//! This crate provides:
//! - `FontCatalog`, the set of font names known to the host font system
//!   (discovered through `fontdb`)
//! - `FontSelection`, a validated font name and point size that renders the
//!   replacement `<font .../>` declaration written into storyboards

pub mod catalog;
pub mod selection;

// Re-export main types for convenience
pub use catalog::FontCatalog;
pub use selection::{FontError, FontSelection};
