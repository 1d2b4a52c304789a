// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Discover source files under a root directory and rewrite each of them.
//!
//! Files are processed strictly one at a time. The first error stops the walk;
//! files rewritten before it stay rewritten, which is safe because every file is
//! replaced atomically on its own.

use crate::{cargo_doc_wrap::{error::DocWrapError,
                             file_rewriter::FileRewriter,
                             types::{ProcessingResult, WrapConfig}},
            common::workspace_utils};
use std::path::{Path, PathBuf};

/// Drives the [`FileRewriter`] over a set of files.
#[derive(Debug)]
pub struct TreeWalker {
    rewriter: FileRewriter,
}

impl TreeWalker {
    #[must_use]
    pub fn new(config: WrapConfig) -> Self {
        Self {
            rewriter: FileRewriter::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &WrapConfig { self.rewriter.config() }

    /// Every file under `root` that matches the configured suffix.
    ///
    /// # Errors
    ///
    /// Returns [`DocWrapError::Configuration`] if `root` is missing or not a
    /// directory, and [`DocWrapError::Read`] if part of the tree cannot be
    /// listed.
    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>, DocWrapError> {
        workspace_utils::find_files_with_suffix(root, &self.config().file_suffix)
    }

    /// Rewrite `files` in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`FileRewriter::process_file`].
    pub fn rewrite_files(&self, files: &[PathBuf]) -> Result<Vec<ProcessingResult>, DocWrapError> {
        files
            .iter()
            .map(|path| {
                tracing::debug!(path = %path.display(), "processing");
                self.rewriter.process_file(path).inspect_err(|error| {
                    tracing::debug!(
                        failed = ?error.path(),
                        "stopping at first error"
                    );
                })
            })
            .collect()
    }

    /// Discover and rewrite every matching file under `root`.
    ///
    /// The root is validated before any file is touched.
    ///
    /// # Errors
    ///
    /// See [`discover`](Self::discover) and [`rewrite_files`](Self::rewrite_files).
    pub fn run(&self, root: &Path) -> Result<Vec<ProcessingResult>, DocWrapError> {
        let files = self.discover(root)?;
        tracing::debug!(root = %root.display(), count = files.len(), "discovered files");
        self.rewrite_files(&files)
    }
}

/// Rewrite the doc comments of every matching file under
/// `working_dir/<root_subdirectory>`, using the defaults in `config`.
///
/// # Errors
///
/// Returns [`DocWrapError::Configuration`] if the configuration is invalid or
/// the root cannot be resolved, and otherwise the first error hit while
/// rewriting.
pub fn wrap_tree(
    working_dir: &Path,
    config: WrapConfig,
) -> Result<Vec<ProcessingResult>, DocWrapError> {
    config.validate()?;
    let root = workspace_utils::resolve_root(working_dir, &config.root_subdirectory)?;
    TreeWalker::new(config).run(&root)
}
