//! The line-by-line translation pass
//!
//! Consumes the whole script as an ordered sequence of lines. Until the
//! import marker has been seen, every line is checked against it fresh: the
//! matching line has its content replaced in place by the zincstd shim, any
//! other line aborts the run. After the gate every line (the shim included)
//! goes through the rewrite rules, one input line to one output line.

use std::fs;
use std::path::Path;

use crate::config::Settings;
use crate::error::ZincError;
use crate::rules::apply_rules;
use crate::shim::{zincstd_shim, STD_INCLUDES};
use crate::zlog;

/// The required first line of every Zinc script.
pub const IMPORT_MARKER: &str = "using zincstd;";

/// Translate a whole Zinc script into C++ source.
///
/// The output starts with the standard includes, then mirrors the input
/// line for line (the marker line carrying the shim block instead of its
/// original content), joined with newlines and ending in one.
pub fn translate_source(source: &str, settings: &Settings) -> Result<String, ZincError> {
    let mut translated: Vec<String> = Vec::new();
    translated.push(STD_INCLUDES.to_string());

    let mut zinc_mode = false;

    for raw_line in source.lines() {
        let mut line = raw_line.to_string();

        if !zinc_mode {
            if raw_line == IMPORT_MARKER {
                zinc_mode = true;
                line = zincstd_shim();
                zlog::verbose("Recognized zincstd import, injecting shim.", settings);
            } else {
                return Err(ZincError::NotAZincFile);
            }
        }

        translated.push(apply_rules(&line));
    }

    zlog::verbose(
        &format!("Translated {} line(s).", translated.len() - 1),
        settings,
    );

    let mut output = translated.join("\n");
    output.push('\n');
    Ok(output)
}

/// Read a script from disk and translate it.
pub fn translate_file(path: &Path, settings: &Settings) -> Result<String, ZincError> {
    let source = fs::read_to_string(path)
        .map_err(|_| ZincError::FileNotFound(path.display().to_string()))?;

    translate_source(&source, settings)
}
