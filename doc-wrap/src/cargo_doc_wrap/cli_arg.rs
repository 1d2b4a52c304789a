// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command-line argument parsing for cargo-doc-wrap.

use crate::cargo_doc_wrap::types::{DEFAULT_FILE_SUFFIX, DEFAULT_MAX_WIDTH,
                                   DEFAULT_ROOT_SUBDIRECTORY, WrapConfig};
use clap::Parser;
use std::path::PathBuf;

/// Re-flow long rustdoc comment lines (`///` and `//!`).
#[derive(Debug, Parser)]
#[command(
    name = "cargo-doc-wrap",
    about = "Re-flow long lines in Rust documentation comments",
    long_about = "A cargo subcommand that rewraps rustdoc comment lines (/// and //!) so \
                  that the words on each line stay within a width budget, keeping the \
                  comment marker and indentation.\n\n\
                  By default (no args), rewrites every .rs file under src/ in place.\n\n\
                  Use --check in CI, or provide specific paths.",
    version
)]
#[allow(clippy::struct_excessive_bools)]
pub struct CLIArg {
    /// Check wrapping without modifying files
    #[arg(long, short = 'c')]
    pub check: bool,

    /// List the files that would be processed and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Summed word width that starts a new comment line
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
    pub max_width: usize,

    /// Only files whose name ends with this suffix are rewritten
    #[arg(long, default_value = DEFAULT_FILE_SUFFIX)]
    pub suffix: String,

    /// Directory to walk, relative to the current directory
    #[arg(long, default_value = DEFAULT_ROOT_SUBDIRECTORY)]
    pub root: PathBuf,

    /// Specific files or directories to rewrite.
    /// If not provided, rewrites everything under --root.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl CLIArg {
    /// Convert CLI arguments to `WrapConfig`.
    #[must_use]
    pub fn to_wrap_config(&self) -> WrapConfig {
        WrapConfig {
            max_width: self.max_width,
            file_suffix: self.suffix.clone(),
            root_subdirectory: self.root.clone(),
            check_only: self.check,
        }
    }
}
