//! Typed errors for the text engine and the session that drives it.
//!
//! Every failure leaves the engine's text in its last known good state.

use ib_tweaker_config::FilterNotFound;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The pattern given to a replace does not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern source as supplied.
        pattern: String,
        /// Compiler diagnostic.
        #[source]
        source: regex::Error,
    },

    /// The replace pattern matched nothing in the current text.
    #[error("no match for pattern '{pattern}'")]
    NoMatch {
        /// Pattern source as supplied.
        pattern: String,
    },

    /// A filter index outside the catalog.
    #[error(transparent)]
    NotFound(#[from] FilterNotFound),

    /// Reading or writing a document failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Save was requested before any document was opened.
    #[error("no document is open")]
    NoDocument,

    /// Save would overwrite a file with empty text and that was not allowed.
    #[error("refusing to overwrite '{}' with empty text", .path.display())]
    EmptySave {
        /// Destination that was left untouched.
        path: PathBuf,
    },
}
