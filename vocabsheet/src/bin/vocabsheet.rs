//! Vocabulary sheet conversion binary.

use std::process::ExitCode;

fn main() -> ExitCode {
    vocabsheet::cli::main()
}
