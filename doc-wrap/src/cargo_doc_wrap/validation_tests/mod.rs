// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end validation tests for `cargo-doc-wrap`.
//!
//! # Testing Philosophy
//!
//! Two tiers, same as the other build tools:
//!
//! ```text
//!           /\
//!          /  \    complete_file_tests.rs:
//!         /    \   • Whole files through the rewriter
//!        / E2E  \  • Classify → wrap → write back
//!       /  Tests \ • Fixture input vs expected output
//!      /          \
//!     /------------\     line_classifier.rs, word_wrapper.rs:
//!    /              \    • Fast, isolated edge cases
//!   / Unit           \   • Single lines, budgets, markers
//!  /  Tests           \
//! /────────────────────\
//! ```
//!
//! Fixture files live in `test_data/complete_file/`. An `input/` file without a
//! counterpart in `expected_output/` must come out byte-identical.
