//! Run configuration for the Zinc translator
//!
//! All flags are parsed once from `argv` into an immutable [`Settings`]
//! struct that is threaded by reference into the translator and the build
//! orchestrator. Nothing here is a process-wide global.

use std::env;
use std::path::PathBuf;

/// Immutable per-run settings, built once from the command line.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    /// Keep zinc_to.cpp on disk after a successful build (`-k`).
    pub keep_translation: bool,
    /// Print `[VERBOSE]` progress diagnostics (`-v`).
    pub verbose: bool,
    /// Disable colored diagnostic output (`--no-color`).
    pub no_color: bool,
}

impl Settings {
    /// Parse settings from the raw argument vector.
    ///
    /// `args[1]` is the input file; only positions 2 and 3 are inspected for
    /// flags, in either order. Anything unrecognized in that window is
    /// returned separately so the caller can warn about it; it never aborts
    /// the run.
    pub fn from_args(args: &[String]) -> (Settings, Vec<String>) {
        let mut settings = Settings::default();
        let mut unrecognized = Vec::new();

        for arg in args.iter().skip(2).take(2) {
            match arg.as_str() {
                "-k" | "--keep-translation" => settings.keep_translation = true,
                "-v" | "--verbose" => settings.verbose = true,
                "--no-color" | "--nc" => settings.no_color = true,
                other => unrecognized.push(other.to_string()),
            }
        }

        (settings, unrecognized)
    }
}

/// Resolve the input script path.
///
/// A leading `./` is stripped, then relative paths are resolved against the
/// current working directory. Absolute paths are left as they are.
pub fn resolve_input_path(raw: &str) -> PathBuf {
    let trimmed = raw.strip_prefix("./").unwrap_or(raw);

    match env::current_dir() {
        Ok(cwd) => cwd.join(trimmed),
        Err(_) => PathBuf::from(trimmed),
    }
}
