// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup for the build tools.
//!
//! Log output goes to stderr so that stdout only carries the tool's report.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the level filter for a run.
#[must_use]
pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN }
}

/// Install a global `fmt` subscriber writing to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn try_init_tracing(verbose: bool) -> miette::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(level_filter(verbose));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .map_err(|error| miette::miette!("Failed to initialize tracing: {error}"))
}
