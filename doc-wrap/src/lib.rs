// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # R3BL Doc Wrap
//!
//! A build tool designed for R3BL projects, but usable in any Rust project.
//!
//! ## cargo-doc-wrap
//!
//! A cargo subcommand that re-flows long lines in Rust documentation comments
//! (`///` and `//!`) so that the words on each line stay within a width budget,
//! keeping the comment marker and the leading indentation of the original line.
//!
//! ### Features
//!
//! - **Word re-flow**: Long doc comment lines are split onto continuation lines
//! - **Marker and indent preservation**: Every continuation line starts exactly like the
//!   line it came from
//! - **Atomic rewrites**: Each file is written to a temporary file and renamed into place
//! - **Check Mode**: Verify wrapping without modifying files (useful for CI)
//!
//! ### Installation
//!
//! From a workspace containing this crate:
//!
//! ```bash
//! cargo install --path doc-wrap
//! ```
//!
//! ### Usage Examples
//!
//! **Wrap every `.rs` file under `src/`** (default):
//! ```bash
//! cargo doc-wrap
//! ```
//!
//! **Wrap specific files or directories**:
//! ```bash
//! cargo doc-wrap src/lib.rs tests/
//! ```
//!
//! **Check without modifying** (useful for CI):
//! ```bash
//! cargo doc-wrap --check
//! ```
//!
//! **Use a different budget**:
//! ```bash
//! cargo doc-wrap --max-width 100
//! ```
//!
//! ### What It Does
//!
//! Only lines that consist of optional whitespace, `//`, a marker (`/` or `!`) and some
//! text are touched. Their words are laid out again from the start; every other line is
//! copied byte for byte.
//!
//! The width budget counts the widths of the words on a line, not the separators or the
//! comment prefix. When adding the next word would push the sum past the budget, a new
//! line is started with that word. Each output line keeps one space after its last word.
//!
//! **Before:**
//! ```text
//!     /// Opens the configured database connection pool, retrying with exponential backoff until the server answers or the deadline expires.
//! ```
//!
//! **After:**
//! ```text
//!     /// Opens the configured database connection pool, retrying with exponential backoff until the
//!     /// server answers or the deadline expires.
//! ```
//!
//! Running the tool a second time changes nothing.
//!
//! ### Architecture
//!
//! **Module structure:**
//! - `src/lib.rs` - Library root
//! - `src/bin/cargo-doc-wrap.rs` - Binary entry point
//! - `src/cargo_doc_wrap/` - Tool implementation
//!   - `cli_arg.rs` - CLI argument parsing
//!   - `line_classifier.rs` - Recognize doc comment lines
//!   - `word_wrapper.rs` - Re-flow words onto prefixed lines
//!   - `file_rewriter.rs` - Rewrite one file with an atomic replace
//!   - `tree_walker.rs` - Discover files and drive the rewriter
//!   - `types.rs` - Type definitions and configuration defaults
//!   - `error.rs` - Error types
//!   - `ui_str.rs` - User-facing messages
//! - `src/common/` - Shared utilities
//!   - `logging.rs` - Tracing setup
//!   - `workspace_utils.rs` - Root resolution and file finding

// Attach all modules.
pub mod cargo_doc_wrap;
pub mod common;

// Re-export commonly used items.
pub use common::*;
