// Library exports for testing and potential library use
//
// The crate is single-threaded and synchronous: every operation runs to
// completion on the caller's thread. The only lock is the `parking_lot::Mutex`
// around the log sink in `debug`.

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod document;
pub mod engine;
pub mod session;

pub mod config {
    //! Configuration re-exports from the `ib-tweaker-config` crate.
    pub use ib_tweaker_config::{
        Config, ConfigError, FONT_TAG_PATTERN, FilterDefinition, FilterNotFound, FilterRule,
        LogLevel, PatternSet, default_filter_rules,
    };
}

pub mod fonts {
    //! Font re-exports from the `ib-tweaker-fonts` crate.
    pub use ib_tweaker_fonts::{FontCatalog, FontError, FontSelection};
}

pub use engine::{EngineError, EngineState, ReplaceResult, TextEngine};
pub use session::Session;
