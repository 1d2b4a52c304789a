// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User-facing strings and messages.

pub const FILE_MODIFIED: &str = "Modified";
pub const FILE_NEEDS_WRAPPING: &str = "Needs wrapping";
pub const NO_FILES_FOUND: &str = "No matching files found to wrap.";
pub const CHECK_MODE_NEEDS_WRAPPING: &str =
    "Some files need wrapping. Run without --check to rewrite them.";
pub const ALL_PROPERLY_WRAPPED: &str = "All doc comments are properly wrapped!";

/// Format a "file modified" message.
#[must_use]
pub fn format_modified(file: &str) -> String { format!("{FILE_MODIFIED}: {file}") }

/// Format a "file would be modified" message for check mode.
#[must_use]
pub fn format_needs_wrapping(file: &str) -> String {
    format!("{FILE_NEEDS_WRAPPING}: {file}")
}

/// Format the dry-run header.
#[must_use]
pub fn format_dry_run_header(count: usize) -> String {
    format!("Dry-run mode: {count} files would be processed:")
}

/// Format summary message.
#[must_use]
pub fn format_summary(total: usize, modified: usize, wrapped_lines: usize) -> String {
    format!("Processed {total} files, {modified} modified, {wrapped_lines} lines wrapped")
}
