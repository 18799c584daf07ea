//! Error kinds for the Zinc translator
//!
//! Fatal errors carry the exit status the binary should terminate with.
//! A failed C++ compilation is deliberately NOT represented here: the
//! compiler's non-zero status is carried inside
//! [`BuildOutcome`](crate::toolchain::BuildOutcome) and the process still
//! exits 0 after reporting it.

use thiserror::Error;

/// Fatal translator errors.
#[derive(Debug, Error)]
pub enum ZincError {
    /// The input script path could not be opened.
    #[error("Error: File '{0}' does not exist.")]
    FileNotFound(String),

    /// A line was reached before the `using zincstd;` import marker.
    /// Reported on stdout with exit status 2, unlike the other kinds.
    #[error("Error : Not a valid ZINC file [2]")]
    NotAZincFile,

    /// The intermediate zinc_to.cpp file could not be created.
    #[error("Error: Unable to create output file.")]
    OutputUnwritable(#[source] std::io::Error),

    /// The C++ compiler subprocess could not be started at all.
    #[error("Error: Failed to run the C++ compiler: {0}")]
    CompilerLaunch(#[source] std::io::Error),
}

impl ZincError {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ZincError::NotAZincFile => 2,
            _ => 1,
        }
    }
}
