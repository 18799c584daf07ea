//! Build-and-run orchestration
//!
//! The translator core only produces a text buffer; everything that touches
//! the real toolchain sits behind the [`BuildRunner`] trait so tests can
//! substitute a fake that never shells out. The real implementation writes
//! the translation to `zinc_to.cpp`, compiles it with `g++`, runs the
//! produced binary and cleans the intermediate file up afterwards.
//!
//! Both the compile and the run are blocking calls with no timeout; a hang
//! in either blocks the whole program.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::Settings;
use crate::error::ZincError;
use crate::translate::translate_file;
use crate::zlog;

/// Fixed relative path of the intermediate C++ translation.
pub const TRANSLATION_FILE: &str = "zinc_to.cpp";
/// Fixed relative path of the compiled executable.
pub const OUTPUT_BINARY: &str = "zinc_output";
/// The external C++ compiler.
pub const CPP_COMPILER: &str = "g++";

/// Structured result of one build-and-run attempt.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    /// The compiler exited with status 0.
    pub compiled: bool,
    /// Captured compiler stderr; empty on success.
    pub diagnostics: String,
    /// The produced binary was started (its own exit status is ignored).
    pub ran: bool,
}

/// The injected build-and-run capability.
pub trait BuildRunner {
    /// Serialize `source`, compile it, and run the result.
    ///
    /// A compiler that runs but fails is an `Ok` outcome with
    /// `compiled: false`; only being unable to write the file or start the
    /// compiler at all is an `Err`.
    fn build_and_run(&self, source: &str, settings: &Settings) -> Result<BuildOutcome, ZincError>;
}

/// The real toolchain: `g++` plus a blocking run of the output binary.
///
/// The fixed relative artifact names are resolved against a working
/// directory, which is the process's current directory for the CLI.
pub struct GccBuildRunner {
    work_dir: PathBuf,
}

impl GccBuildRunner {
    /// Runner operating in the current working directory.
    pub fn new() -> Self {
        GccBuildRunner {
            work_dir: PathBuf::from("."),
        }
    }

    /// Runner operating in `dir` instead of the current directory.
    pub fn in_dir(dir: &Path) -> Self {
        GccBuildRunner {
            work_dir: dir.to_path_buf(),
        }
    }

    /// Run the compiled binary with inherited stdio, blocking until it
    /// exits. The Zinc program's exit status is not ours to propagate; only
    /// a failure to start it at all is reported.
    pub(crate) fn run_output_binary(&self, settings: &Settings) -> bool {
        let run = Command::new(format!("./{}", OUTPUT_BINARY))
            .current_dir(&self.work_dir)
            .status();

        match run {
            Ok(_) => true,
            Err(e) => {
                zlog::err(
                    &format!("Failed to run {}: {}", OUTPUT_BINARY, e),
                    settings,
                );
                false
            }
        }
    }
}

impl Default for GccBuildRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildRunner for GccBuildRunner {
    fn build_and_run(&self, source: &str, settings: &Settings) -> Result<BuildOutcome, ZincError> {
        let translation_path = self.work_dir.join(TRANSLATION_FILE);
        fs::write(&translation_path, source).map_err(ZincError::OutputUnwritable)?;

        zlog::verbose("Compiling the translation...", settings);
        let compile = Command::new(CPP_COMPILER)
            .arg("-o")
            .arg(OUTPUT_BINARY)
            .arg(TRANSLATION_FILE)
            .current_dir(&self.work_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(ZincError::CompilerLaunch)?;

        if !compile.status.success() {
            // The intermediate file is left on disk next to the diagnostics.
            return Ok(BuildOutcome {
                compiled: false,
                diagnostics: String::from_utf8_lossy(&compile.stderr).into_owned(),
                ran: false,
            });
        }

        zlog::verbose("Compilation successful.", settings);
        zlog::verbose("Running the program...", settings);
        let ran = self.run_output_binary(settings);

        if settings.keep_translation {
            zlog::verbose("Kept the C++ translation.", settings);
        } else {
            let _ = fs::remove_file(&translation_path);
        }

        Ok(BuildOutcome {
            compiled: true,
            diagnostics: String::new(),
            ran,
        })
    }
}

/// Translate the script at `path` and hand the result to `runner`.
pub fn run_pipeline(
    path: &Path,
    settings: &Settings,
    runner: &dyn BuildRunner,
) -> Result<BuildOutcome, ZincError> {
    let translated = translate_file(path, settings)?;
    runner.build_and_run(&translated, settings)
}
