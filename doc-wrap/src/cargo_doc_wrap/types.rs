// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type definitions shared by the doc-wrap pipeline.

use crate::cargo_doc_wrap::error::DocWrapError;
use std::path::PathBuf;

/// Column budget that triggers a line break.
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Only files whose name ends with this suffix are rewritten.
pub const DEFAULT_FILE_SUFFIX: &str = ".rs";

/// Directory (relative to the working directory) that is walked by default.
pub const DEFAULT_ROOT_SUBDIRECTORY: &str = "src";

/// The two recognized documentation comment styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentMarker {
    /// `///` documents the item that follows.
    Outer,
    /// `//!` documents the enclosing item.
    Inner,
}

impl CommentMarker {
    /// Maps the character after `//` to a marker.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '/' => Some(Self::Outer),
            '!' => Some(Self::Inner),
            _ => None,
        }
    }

    /// The full comment opener, `///` or `//!`.
    #[must_use]
    pub fn opener(self) -> &'static str {
        match self {
            Self::Outer => "///",
            Self::Inner => "//!",
        }
    }
}

/// A doc-comment line split into the parts the wrapper needs.
///
/// `indent + "//" + marker + body` reconstructs the line without its
/// terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocComment<'a> {
    /// Leading whitespace, kept verbatim on every output line.
    pub indent: &'a str,
    pub marker: CommentMarker,
    /// Everything after the marker.
    pub body: &'a str,
}

impl ParsedDocComment<'_> {
    /// Whitespace separated words of the body, never empty strings.
    pub fn words(&self) -> impl Iterator<Item = &str> { self.body.split_whitespace() }

    /// Prefix that starts every output line: indent, opener, one space.
    #[must_use]
    pub fn line_prefix(&self) -> String {
        format!("{}{} ", self.indent, self.marker.opener())
    }
}

/// Configuration for a wrapping run.
///
/// [`Default`] reproduces the fixed behavior: 80 columns, `.rs` files, `src/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapConfig {
    /// Summed word width at which a new output line is started.
    pub max_width: usize,
    /// File name suffix filter used by the tree walker.
    pub file_suffix: String,
    /// Directory walked when no explicit paths are given.
    pub root_subdirectory: PathBuf,
    /// Compute results without writing anything.
    pub check_only: bool,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            root_subdirectory: PathBuf::from(DEFAULT_ROOT_SUBDIRECTORY),
            check_only: false,
        }
    }
}

impl WrapConfig {
    /// Reject settings that cannot produce a meaningful run.
    ///
    /// # Errors
    ///
    /// Returns [`DocWrapError::Configuration`] for a zero `max_width` or an
    /// empty `file_suffix`.
    pub fn validate(&self) -> Result<(), DocWrapError> {
        if self.max_width == 0 {
            return Err(DocWrapError::configuration("max width must be at least 1"));
        }
        if self.file_suffix.is_empty() {
            return Err(DocWrapError::configuration("file suffix must not be empty"));
        }
        Ok(())
    }
}

/// Outcome of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    pub file_path: PathBuf,
    /// The transformed content differs from what was on disk.
    pub modified: bool,
    /// Number of doc-comment lines that were split across several lines.
    pub wrapped_lines: usize,
}

impl ProcessingResult {
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            modified: false,
            wrapped_lines: 0,
        }
    }

    pub fn mark_modified(&mut self) { self.modified = true; }
}
