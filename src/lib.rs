//! Zinc Translator - Library Entry Point
//!
//! ## Translation Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  STAGE 0: IMPORT GATE                                        │
//! │    → First line must be exactly `using zincstd;`            │
//! │    → On match: line replaced in place by the zincstd shim   │
//! │    → Any earlier line: `Error : Not a valid ZINC file [2]`  │
//! ├──────────────────────────────────────────────────────────────┤
//! │  STAGE 1: LINE REWRITING (Zinc → C++)                        │
//! │    → fn        → void                                       │
//! │    → main()    → int main()                                 │
//! │    → string    → std::string                                │
//! │    → loop(n,i) → for(int i = 0; i < n; i++)                 │
//! │    → list a[…] → std::string a[N] = {…};                    │
//! ├──────────────────────────────────────────────────────────────┤
//! │  STAGE 2: C++ COMPILATION (g++)                              │
//! │    → Translation written to zinc_to.cpp                     │
//! │    → g++ -o zinc_output zinc_to.cpp                         │
//! │    → On success: run ./zinc_output, delete zinc_to.cpp      │
//! │      (unless --keep-translation)                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rewriter is deliberately line-scoped: one input line maps to exactly
//! one output line, constructs are found by substring search with a token
//! boundary check, and nothing is tokenized or parsed. Nested constructs,
//! multi-line expressions and occurrences inside string literals are out of
//! contract.

pub mod config;
pub mod error;
pub mod rules;
pub mod shim;
pub mod toolchain;
pub mod translate;
pub mod zlog;

mod tests;

// Re-export the main entry points for convenience
pub use config::{resolve_input_path, Settings};
pub use error::ZincError;
pub use toolchain::{run_pipeline, BuildOutcome, BuildRunner, GccBuildRunner};
pub use translate::{translate_file, translate_source, IMPORT_MARKER};
