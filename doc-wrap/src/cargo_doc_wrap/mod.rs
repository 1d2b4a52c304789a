// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rust documentation comment wrapping.
//!
//! Control flow, leaves last:
//!
//! ```text
//! tree_walker ─► file_rewriter ─► line_classifier ─► word_wrapper
//!                (per file)       (per line)         (per doc comment)
//! ```

pub mod cli_arg;
pub mod error;
pub mod file_rewriter;
pub mod line_classifier;
pub mod tree_walker;
pub mod types;
pub mod ui_str;
pub mod word_wrapper;

#[cfg(test)]
pub mod validation_tests;

// Re-export public API for flat module interface (like cmdr/).
pub use cli_arg::*;
pub use error::*;
pub use file_rewriter::*;
pub use line_classifier::*;
pub use tree_walker::*;
pub use types::*;
pub use ui_str::*;
pub use word_wrapper::*;
