//! Reading and writing storyboard documents.
//!
//! Documents are opaque text. Reads decode UTF-8, replacing invalid
//! sequences rather than failing. Writes are atomic: the text goes to a
//! sibling temp file which is then renamed over the destination.

use crate::engine::EngineError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the whole file at `path` as text.
pub fn read_text(path: &Path) -> Result<String, EngineError> {
    let bytes = fs::read(path).map_err(|source| io_error(path, source))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            log::warn!(
                "{:?} is not valid UTF-8 (at byte {}); invalid sequences were replaced",
                path,
                e.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Overwrite the file at `path` with `text`.
pub fn write_text(path: &Path, text: &str) -> Result<(), EngineError> {
    let temp_path = temp_path_for(path);
    if let Err(source) = fs::write(&temp_path, text) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error(path, source));
    }
    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error(path, source));
    }
    log::info!("Wrote {} bytes to {:?}", text.len(), path);
    Ok(())
}

/// `Main.storyboard` -> `Main.storyboard.tmp`, in the same directory so the
/// rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn io_error(path: &Path, source: std::io::Error) -> EngineError {
    EngineError::Io {
        path: path.to_path_buf(),
        source,
    }
}
