//! Shared integration test helpers for ib-tweaker.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{write_storyboard, SAMPLE_STORYBOARD};
//! ```

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A trimmed storyboard with two font declarations on separate lines.
pub const SAMPLE_STORYBOARD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<document type="com.apple.InterfaceBuilder3.CocoaTouch.Storyboard.XIB" version="3.0">
    <scenes>
        <scene sceneID="tne-QT-ifu">
            <label opaque="NO" text="Title" id="abc-12-def">
                <font key="font" metaFont="system" size="17"/>
                <color key="textColor" systemColor="labelColor"/>
            </label>
            <button opaque="NO" id="ghi-34-jkl">
                <font key="font" size="12" name="Menlo-Regular"/>
            </button>
        </scene>
    </scenes>
</document>
"#;

/// Write `text` to `name` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for as long as the file is used.
pub fn write_storyboard(name: &str, text: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, text).expect("Failed to write storyboard");
    (path, temp_dir)
}
