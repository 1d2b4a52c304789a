// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decide whether a source line is a doc comment eligible for wrapping.
//!
//! This is a textual classifier, not a syntactic one. A line that starts with
//! `///` or `//!` is a doc comment even when it sits inside a string literal.
//! Lines with more slashes (`////`) match as well: the marker is the third `/`
//! and the remaining slashes are part of the body.

use crate::cargo_doc_wrap::types::{CommentMarker, ParsedDocComment};
use regex::Regex;
use std::sync::LazyLock;

/// Regex to match a doc-comment-only line (terminator already stripped).
///
/// Captures:
/// - Group 1: leading whitespace
/// - Group 2: marker character, `/` or `!`
/// - Group 3: the body, at least one character
static DOC_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)//([/!])(.+)$").expect("Invalid doc comment regex")
});

/// Split a raw line into its content and its terminator (`"\r\n"`, `"\n"` or
/// `""` for a final unterminated line).
#[must_use]
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Classify a line. Returns `None` when the line must pass through unchanged.
///
/// The line may still carry its terminator; it is ignored.
#[must_use]
pub fn classify_line(line: &str) -> Option<ParsedDocComment<'_>> {
    let (content, _) = split_line_ending(line);
    let caps = DOC_COMMENT_REGEX.captures(content)?;

    let indent = caps.get(1).map_or("", |m| m.as_str());
    let marker = caps
        .get(2)
        .and_then(|m| m.as_str().chars().next())
        .and_then(CommentMarker::from_char)?;
    let body = caps.get(3).map_or("", |m| m.as_str());

    Some(ParsedDocComment {
        indent,
        marker,
        body,
    })
}
