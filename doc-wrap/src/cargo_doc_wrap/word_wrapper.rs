// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Re-flow the words of a doc comment onto one or more prefixed lines.
//!
//! # Width accounting
//!
//! The counter for an output line is the sum of the display widths of the words
//! placed on it. Separators and the `///` prefix are not counted, so a line can
//! be longer than `max_width` columns once those are included.
//!
//! Before a word is appended, `counter + width(word)` is compared against
//! `max_width`. If it is larger and the line already holds a word, the line is
//! emitted and a new one is started whose counter is seeded with the width of
//! that overflowing word. A single word wider than `max_width` therefore gets a
//! line of its own and is never split.
//!
//! ```text
//! max_width = 10, words = ["aaaa", "bbbb", "cccc"]
//!
//! counter  4 -> "/// aaaa "
//! counter  8 -> "/// aaaa bbbb "
//! 8 + 4 > 10 -> emit, counter 4 -> "/// cccc "
//! ```
//!
//! Every output line ends with a separator space after its last word.
//!
//! # Word width
//!
//! Width is the display width in terminal columns (`unicode-width`), not the
//! character count. The two agree for ASCII. Wide characters such as CJK count
//! two columns each, so a body of such words breaks earlier than a plain
//! character count would: thirty `日本` words are 60 characters but 120
//! columns, and take two lines at a budget of 80.

use crate::cargo_doc_wrap::types::ParsedDocComment;
use unicode_width::UnicodeWidthStr;

/// Width of a word as it is counted against the budget.
#[must_use]
pub fn word_width(word: &str) -> usize { word.width() }

/// Accumulates output lines for a single doc comment.
struct WrapContext {
    prefix: String,
    max_width: usize,
    lines: Vec<String>,
    current_line: String,
    counter: usize,
    has_words: bool,
}

impl WrapContext {
    fn new(prefix: String, max_width: usize) -> Self {
        Self {
            current_line: prefix.clone(),
            prefix,
            max_width,
            lines: Vec::new(),
            counter: 0,
            has_words: false,
        }
    }

    fn start_new_line(&mut self) {
        let old_line = std::mem::replace(&mut self.current_line, self.prefix.clone());
        self.lines.push(old_line);
    }

    fn push_word(&mut self, word: &str) {
        let width = word_width(word);

        if self.has_words && self.counter + width > self.max_width {
            self.start_new_line();
            self.counter = width;
        } else {
            self.counter += width;
        }

        self.current_line.push_str(word);
        self.current_line.push(' ');
        self.has_words = true;
    }

    fn finish(mut self) -> Vec<String> {
        self.lines.push(self.current_line);
        self.lines
    }
}

/// Wrap the body of `parsed` into lines prefixed with its indent and opener.
///
/// Returned lines carry no terminator. A body without words yields one line
/// holding just the prefix.
#[must_use]
pub fn wrap_doc_comment(parsed: &ParsedDocComment<'_>, max_width: usize) -> Vec<String> {
    let mut ctx = WrapContext::new(parsed.line_prefix(), max_width);
    for word in parsed.words() {
        ctx.push_word(word);
    }
    ctx.finish()
}
