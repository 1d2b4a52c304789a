// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors surfaced by the doc-wrap pipeline.
//!
//! None of these are recovered locally. The first one aborts the run and is
//! rendered by [`miette`] in the binary. Files already rewritten stay rewritten,
//! since each file update is atomic on its own.

use std::path::PathBuf;

/// Every failure the tool can report.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DocWrapError {
    /// The root directory is missing or is not a directory, or the
    /// configuration is otherwise unusable. Reported before any file is touched.
    #[error("Invalid configuration: {message}")]
    #[diagnostic(
        code(r3bl_doc_wrap::configuration),
        help("Run from a crate root that has a `src/` directory, or pass --root <DIR>")
    )]
    Configuration { message: String },

    /// A file or directory entry could not be opened, read, or decoded as UTF-8.
    #[error("Failed to read {}", path.display())]
    #[diagnostic(code(r3bl_doc_wrap::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temporary file next to the target could not be created or written.
    /// The target is untouched.
    #[error("Failed to write temporary file for {}", path.display())]
    #[diagnostic(
        code(r3bl_doc_wrap::write),
        help("Check free disk space and write permission on the parent directory")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Renaming the temporary file over the target failed. The target still
    /// holds its previous content.
    #[error("Failed to replace {} with its rewritten content", path.display())]
    #[diagnostic(code(r3bl_doc_wrap::replace))]
    Replace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocWrapError {
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The file the error is about, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Configuration { .. } => None,
            Self::Read { path, .. } | Self::Write { path, .. } | Self::Replace { path, .. } => {
                Some(path)
            }
        }
    }
}
