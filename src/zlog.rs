//! Zinc standard logging
//!
//! Leveled diagnostic printing, gated on the per-run [`Settings`]:
//! - `verbose` / `warn` go to stdout and only appear with `--verbose`
//! - `err` goes to stderr and always appears
//!
//! Color is applied per call and suppressed by `--no-color`.

use crate::config::Settings;
use colored::Colorize;

/// Print a `[VERBOSE]` progress line. Only shown with `--verbose`.
pub fn verbose(message: &str, settings: &Settings) {
    if !settings.verbose {
        return;
    }
    if settings.no_color {
        println!("[VERBOSE] {}", message);
    } else {
        println!("{} {}", "[VERBOSE]".purple(), message);
    }
}

/// Print a `[WARNING]` line. Only shown with `--verbose`; warnings never
/// abort or alter the run.
pub fn warn(message: &str, settings: &Settings) {
    if !settings.verbose {
        return;
    }
    if settings.no_color {
        println!("[WARNING] {}", message);
    } else {
        println!("{} {}", "[WARNING]".yellow(), message);
    }
}

/// Print an `[ERROR]` line to stderr. Always shown.
pub fn err(message: &str, settings: &Settings) {
    if settings.no_color {
        eprintln!("[ERROR] {}", message);
    } else {
        eprintln!("{} {}", "[ERROR]".red(), message);
    }
}
