//! Zinc Translator - Binary Entry Point
//!
//! Thin glue over the library: parse flags into [`Settings`], resolve the
//! input path, run the translate/compile/run pipeline and map errors to
//! exit codes. Everything interesting lives in the library crate.

use std::env;
use std::process::exit;

use zinc::config::{resolve_input_path, Settings};
use zinc::error::ZincError;
use zinc::toolchain::{run_pipeline, GccBuildRunner};
use zinc::zlog;

fn print_usage() {
    eprintln!("Usage: zinc <file> [-k|--keep-translation] [-v|--verbose] [--no-color]");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        exit(1);
    }

    let (settings, unrecognized) = Settings::from_args(&args);
    for flag in &unrecognized {
        zlog::warn(&format!("Unknown argument `{}`", flag), &settings);
    }

    if settings.verbose {
        zlog::verbose("Verbose output: [true]", &settings);
        zlog::verbose(
            &format!("Keep translation: [{}]", settings.keep_translation),
            &settings,
        );
    }

    let input_path = resolve_input_path(&args[1]);
    zlog::verbose(&format!("Full path [{}]", input_path.display()), &settings);

    match run_pipeline(&input_path, &settings, &GccBuildRunner::new()) {
        Ok(outcome) => {
            if !outcome.compiled {
                // Reported, but the process still completes normally.
                eprintln!("| Compilation failed. Please check the code for errors.");
                eprint!("{}", outcome.diagnostics);
            }
        }
        Err(err @ ZincError::NotAZincFile) => {
            // The invalid-source diagnostic goes to stdout, with its own
            // exit status.
            println!("{}", err);
            exit(err.exit_code());
        }
        Err(err) => {
            zlog::err(&err.to_string(), &settings);
            exit(err.exit_code());
        }
    }
}
