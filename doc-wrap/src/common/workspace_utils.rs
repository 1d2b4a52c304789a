// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Root resolution and file discovery.
//!
//! Find the directory to walk and collect the files whose names end with the
//! configured suffix.

use crate::cargo_doc_wrap::DocWrapError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve `subdirectory` against `working_dir` and check that it is a
/// directory.
///
/// An absolute `subdirectory` is used as is.
///
/// # Errors
///
/// Returns [`DocWrapError::Configuration`] if the path does not exist or is not
/// a directory.
pub fn resolve_root(working_dir: &Path, subdirectory: &Path) -> Result<PathBuf, DocWrapError> {
    let root = working_dir.join(subdirectory);
    ensure_directory(&root)?;
    Ok(root)
}

/// Check that `path` exists and is a directory.
///
/// # Errors
///
/// Returns [`DocWrapError::Configuration`] otherwise.
pub fn ensure_directory(path: &Path) -> Result<(), DocWrapError> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(DocWrapError::configuration(format!(
            "root `{}` is not a directory",
            path.display()
        ))),
        Err(error) => Err(DocWrapError::configuration(format!(
            "root `{}` is not accessible: {error}",
            path.display()
        ))),
    }
}

/// Whether the file name of `path` ends with `suffix`.
#[must_use]
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}

/// Find every regular file under `root` whose name ends with `suffix`.
///
/// Symlinks are not followed. The result is sorted so that runs are
/// reproducible.
///
/// # Errors
///
/// Returns [`DocWrapError::Configuration`] if `root` is not a directory, and
/// [`DocWrapError::Read`] if a directory below it cannot be listed.
pub fn find_files_with_suffix(root: &Path, suffix: &str) -> Result<Vec<PathBuf>, DocWrapError> {
    ensure_directory(root)?;

    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|error| {
            let path = error.path().unwrap_or(root).to_path_buf();
            DocWrapError::Read {
                path,
                source: error.into(),
            }
        })?;

        if entry.file_type().is_file() && has_suffix(entry.path(), suffix) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Find matching files in explicitly given paths.
///
/// Files are taken as given when their name ends with `suffix`; directories are
/// walked with [`find_files_with_suffix`]. Symlinks are skipped, as they are
/// during the walk.
///
/// # Errors
///
/// Returns [`DocWrapError::Configuration`] for a path that does not exist, and
/// propagates errors from walking directories.
pub fn find_files_in_paths(paths: &[PathBuf], suffix: &str) -> Result<Vec<PathBuf>, DocWrapError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_symlink() {
            tracing::warn!(path = %path.display(), "skipping symlink");
        } else if path.is_file() {
            if has_suffix(path, suffix) {
                files.push(path.clone());
            }
        } else if path.is_dir() {
            files.extend(find_files_with_suffix(path, suffix)?);
        } else {
            return Err(DocWrapError::configuration(format!(
                "path `{}` does not exist",
                path.display()
            )));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
