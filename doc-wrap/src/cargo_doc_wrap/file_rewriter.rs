// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rewrite one file: wrap its doc comments and swap the result into place.
//!
//! The new content is first written to a temporary file in the same directory
//! as the target, then renamed over it. A reader sees either the old complete
//! file or the new complete file, never a partial write.

use crate::cargo_doc_wrap::{error::DocWrapError,
                            line_classifier::{classify_line, split_line_ending},
                            types::{ProcessingResult, WrapConfig},
                            word_wrapper::wrap_doc_comment};
use std::{borrow::Cow,
          io::Write,
          path::{Path, PathBuf}};
use tempfile::NamedTempFile;

/// Prefix for temporary files, so stray ones are easy to spot.
const TEMP_FILE_PREFIX: &str = ".doc-wrap-";

/// Result of transforming a whole source text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenSource {
    pub content: String,
    /// Doc-comment lines that became more than one line.
    pub wrapped_lines: usize,
}

/// Transform a single raw line, terminator included.
///
/// Lines that are not doc comments come back borrowed and byte-identical.
/// The lines produced from a doc comment are joined with the input line's own
/// terminator, and the last one keeps that terminator too. An unterminated
/// line is joined with `"\n"`.
#[must_use]
pub fn process_line(line: &str, max_width: usize) -> Cow<'_, str> {
    process_line_with_fallback(line, max_width, "\n")
}

/// Like [`process_line`], but an unterminated line is joined with
/// `fallback_ending`.
fn process_line_with_fallback<'a>(
    line: &'a str,
    max_width: usize,
    fallback_ending: &str,
) -> Cow<'a, str> {
    let Some(parsed) = classify_line(line) else {
        return Cow::Borrowed(line);
    };

    let (_, line_ending) = split_line_ending(line);
    let separator = if line_ending.is_empty() { fallback_ending } else { line_ending };

    let mut output = wrap_doc_comment(&parsed, max_width).join(separator);
    output.push_str(line_ending);
    Cow::Owned(output)
}

/// Apply [`process_line`] to every line of `source`, in order.
///
/// A final unterminated line is joined with the terminator of the line before
/// it, so a CRLF file does not pick up a bare `"\n"`.
#[must_use]
pub fn rewrite_source(source: &str, max_width: usize) -> RewrittenSource {
    let mut content = String::with_capacity(source.len());
    let mut wrapped_lines = 0;
    let mut previous_ending = "\n";

    for line in source.split_inclusive('\n') {
        let processed = process_line_with_fallback(line, max_width, previous_ending);
        let (_, line_ending) = split_line_ending(line);
        if !line_ending.is_empty() {
            previous_ending = line_ending;
        }
        if matches!(processed, Cow::Owned(_))
            && split_line_ending(&processed).0.contains('\n')
        {
            wrapped_lines += 1;
        }
        content.push_str(&processed);
    }

    RewrittenSource {
        content,
        wrapped_lines,
    }
}

/// New content for `target`, fully written to a temporary file but not yet
/// visible at the target path.
///
/// [`commit`](Self::commit) renames the temporary file over the target.
/// Dropping a staged rewrite instead deletes the temporary file and leaves
/// the target exactly as it was.
#[derive(Debug)]
pub struct StagedRewrite {
    target: PathBuf,
    temp_file: NamedTempFile,
}

impl StagedRewrite {
    /// Write `content` to a temporary file next to `target`.
    ///
    /// The temporary file gets the target's permissions when the target
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`DocWrapError::Write`] if the temporary file cannot be created,
    /// written, or synced.
    pub fn stage(target: &Path, content: &str) -> Result<Self, DocWrapError> {
        let write_error = |source| DocWrapError::Write {
            path: target.to_path_buf(),
            source,
        };

        let parent = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut temp_file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .tempfile_in(parent)
            .map_err(write_error)?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(write_error)?;
        temp_file.as_file().sync_all().map_err(write_error)?;

        if let Ok(metadata) = std::fs::metadata(target) {
            temp_file
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_error)?;
        }

        Ok(Self {
            target: target.to_path_buf(),
            temp_file,
        })
    }

    #[cfg(test)]
    fn temp_path(&self) -> &Path { self.temp_file.path() }

    /// Atomically replace the target with the staged content.
    ///
    /// # Errors
    ///
    /// Returns [`DocWrapError::Replace`] if the rename fails. The target keeps
    /// its previous content and the temporary file is removed.
    pub fn commit(self) -> Result<(), DocWrapError> {
        let Self { target, temp_file } = self;
        match temp_file.persist(&target) {
            Ok(_) => Ok(()),
            Err(persist_error) => Err(DocWrapError::Replace {
                path: target,
                source: persist_error.error,
            }),
        }
    }
}

/// Rewrites doc comments in files, one file at a time.
#[derive(Debug)]
pub struct FileRewriter {
    config: WrapConfig,
}

impl FileRewriter {
    /// Create a new file rewriter with the given configuration.
    #[must_use]
    pub fn new(config: WrapConfig) -> Self { Self { config } }

    #[must_use]
    pub fn config(&self) -> &WrapConfig { &self.config }

    /// Process a single file.
    ///
    /// Nothing is written when the content is already wrapped, or in check
    /// mode. `modified` in the result reports whether the content changed (or
    /// would change).
    ///
    /// # Errors
    ///
    /// - [`DocWrapError::Read`] if the file cannot be read as UTF-8 text.
    /// - [`DocWrapError::Write`] if the temporary file cannot be written.
    /// - [`DocWrapError::Replace`] if the final rename fails.
    ///
    /// In every case the file at `path` is left unmodified.
    pub fn process_file(&self, path: &Path) -> Result<ProcessingResult, DocWrapError> {
        let mut result = ProcessingResult::new(path.to_path_buf());

        let source = std::fs::read_to_string(path).map_err(|source| DocWrapError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let rewritten = rewrite_source(&source, self.config.max_width);
        result.wrapped_lines = rewritten.wrapped_lines;

        if rewritten.content == source {
            tracing::debug!(path = %path.display(), "already wrapped");
            return Ok(result);
        }

        result.mark_modified();

        if self.config.check_only {
            tracing::debug!(path = %path.display(), "needs wrapping (check only)");
            return Ok(result);
        }

        StagedRewrite::stage(path, &rewritten.content)?.commit()?;
        tracing::info!(
            path = %path.display(),
            wrapped_lines = rewritten.wrapped_lines,
            "rewrote doc comments"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn long_doc_line(indent: &str, marker: &str, words: usize) -> String {
        let body = (0..words).map(|i| format!("word{i:05}")).collect::<Vec<_>>();
        format!("{indent}//{marker} {}", body.join(" "))
    }

    #[test]
    fn test_process_line_passes_through_code() {
        let line = "fn main() {  }\n";
        assert!(matches!(process_line(line, 80), Cow::Borrowed(l) if l == line));
    }

    #[test]
    fn test_process_line_adds_trailing_space() {
        assert_eq!(process_line("/// one two three\n", 80), "/// one two three \n");
    }

    #[test]
    fn test_process_line_keeps_crlf() {
        let line = format!("{}\r\n", long_doc_line("", "/", 10));
        let output = process_line(&line, 80);
        assert_eq!(output.matches("\r\n").count(), 2);
        assert!(!output.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_process_line_without_terminator() {
        let line = long_doc_line("", "!", 10);
        let output = process_line(&line, 80);
        assert_eq!(output.lines().count(), 2);
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_rewrite_source_counts_wrapped_lines() {
        let source = format!(
            "{}\n/// short\nfn f() {{}}\n{}\n",
            long_doc_line("", "!", 10),
            long_doc_line("    ", "/", 20)
        );
        let rewritten = rewrite_source(&source, 80);
        assert_eq!(rewritten.wrapped_lines, 2);
        assert!(rewritten.content.contains("/// short \nfn f() {}\n"));
    }

    #[test]
    fn test_rewrite_source_only_non_matching_lines_is_identical() {
        let source = "// plain\n    // not a doc comment\nfn main() {}\n\n// banner\r\nlast";
        let rewritten = rewrite_source(source, 80);
        assert_eq!(rewritten.content, source);
        assert_eq!(rewritten.wrapped_lines, 0);
    }

    #[test]
    fn test_rewrite_source_four_slashes_are_wrapped() {
        let rewritten = rewrite_source("//// banner text\n", 80);
        assert_eq!(rewritten.content, "/// / banner text \n");
        assert_eq!(rewrite_source(&rewritten.content, 80).content, rewritten.content);
    }

    #[test]
    fn test_rewrite_source_unterminated_last_line_in_crlf_file() {
        let source = format!("/// short\r\n{}", long_doc_line("", "/", 10));
        let rewritten = rewrite_source(&source, 80);

        assert_eq!(rewritten.wrapped_lines, 1);
        assert_eq!(rewritten.content.matches("\r\n").count(), 2);
        assert!(!rewritten.content.replace("\r\n", "").contains('\n'));
        assert!(rewritten.content.ends_with(' '));
    }

    #[test]
    fn test_process_file_rewrites_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lib.rs");
        fs::write(&path, format!("{}\npub fn f() {{}}\n", long_doc_line("", "/", 10))).unwrap();

        let rewriter = FileRewriter::new(WrapConfig::default());
        let result = rewriter.process_file(&path).unwrap();

        assert!(result.modified);
        assert_eq!(result.wrapped_lines, 1);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.ends_with("pub fn f() {}\n"));
    }

    #[test]
    fn test_process_file_check_mode_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lib.rs");
        let original = format!("{}\n", long_doc_line("", "/", 10));
        fs::write(&path, &original).unwrap();

        let rewriter = FileRewriter::new(WrapConfig {
            check_only: true,
            ..WrapConfig::default()
        });
        let result = rewriter.process_file(&path).unwrap();

        assert!(result.modified);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_process_file_second_run_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lib.rs");
        fs::write(&path, format!("{}\n", long_doc_line("  ", "!", 25))).unwrap();

        let rewriter = FileRewriter::new(WrapConfig::default());
        assert!(rewriter.process_file(&path).unwrap().modified);
        let once = fs::read_to_string(&path).unwrap();

        assert!(!rewriter.process_file(&path).unwrap().modified);
        assert_eq!(fs::read_to_string(&path).unwrap(), once);
    }

    #[test]
    fn test_process_nonexistent_file() {
        let rewriter = FileRewriter::new(WrapConfig::default());
        let result = rewriter.process_file(Path::new("/nonexistent/file.rs"));
        assert!(matches!(result, Err(DocWrapError::Read { .. })));
    }

    #[test]
    fn test_process_non_utf8_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.rs");
        fs::write(&path, [0xff, 0xfe, 0x00, b'/']).unwrap();

        let rewriter = FileRewriter::new(WrapConfig::default());
        let result = rewriter.process_file(&path);

        assert!(matches!(result, Err(DocWrapError::Read { .. })));
        assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00, b'/']);
    }

    #[test]
    fn test_dropped_stage_leaves_target_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lib.rs");
        fs::write(&path, "original\n").unwrap();

        let staged = StagedRewrite::stage(&path, "replacement\n").unwrap();
        let temp_path = staged.temp_path().to_path_buf();
        assert_eq!(fs::read_to_string(&temp_path).unwrap(), "replacement\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "original\n");

        drop(staged);

        assert!(!temp_path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_committed_stage_replaces_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lib.rs");
        fs::write(&path, "original\n").unwrap();

        let staged = StagedRewrite::stage(&path, "replacement\n").unwrap();
        let temp_path = staged.temp_path().to_path_buf();
        staged.commit().unwrap();

        assert!(!temp_path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "replacement\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_stage_in_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("lib.rs");
        let result = StagedRewrite::stage(&path, "content");
        assert!(matches!(result, Err(DocWrapError::Write { .. })));
    }

    #[test]
    fn test_commit_over_directory_is_replace_error() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "keep").unwrap();

        let staged = StagedRewrite::stage(&target, "content").unwrap();
        let result = staged.commit();

        assert!(matches!(result, Err(DocWrapError::Replace { .. })));
        assert!(target.is_dir());
        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "keep");
    }
}
