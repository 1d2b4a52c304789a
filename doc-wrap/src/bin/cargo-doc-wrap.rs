// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_doc_wrap::{cargo_doc_wrap::{CLIArg, TreeWalker, ui_str},
                    common::{logging, workspace_utils}};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:?}");
        process::exit(1);
    }
}

fn run() -> miette::Result<()> {
    // Parse args, skipping the subcommand name if invoked via cargo
    let args: Vec<String> = std::env::args().collect();
    let cli_arg = if args.get(1).is_some_and(|arg| arg == "doc-wrap") {
        // Invoked as "cargo doc-wrap" - skip the subcommand name
        CLIArg::parse_from(args.iter().enumerate().filter_map(|(i, arg)| {
            if i == 1 {
                None // Skip "doc-wrap"
            } else {
                Some(arg.as_str())
            }
        }))
    } else {
        // Invoked directly as "cargo-doc-wrap"
        CLIArg::parse()
    };

    logging::try_init_tracing(cli_arg.verbose)?;

    let config = cli_arg.to_wrap_config();
    config.validate()?;
    let walker = TreeWalker::new(config);

    // Get files to process
    let files = if cli_arg.paths.is_empty() {
        let working_dir = std::env::current_dir().into_diagnostic()?;
        let root =
            workspace_utils::resolve_root(&working_dir, &walker.config().root_subdirectory)?;
        tracing::debug!(root = %root.display(), "file discovery: walking root");
        walker.discover(&root)?
    } else {
        tracing::debug!(
            count = cli_arg.paths.len(),
            "file discovery: using paths provided as arguments"
        );
        workspace_utils::find_files_in_paths(&cli_arg.paths, &walker.config().file_suffix)?
    };

    if files.is_empty() {
        println!("{}", ui_str::NO_FILES_FOUND);
        return Ok(());
    }

    // Dry-run mode: show files and exit
    if cli_arg.dry_run {
        println!("{}", ui_str::format_dry_run_header(files.len()));
        for file in &files {
            println!("  - {}", file.display());
        }
        return Ok(());
    }

    let check_only = walker.config().check_only;
    let results = walker.rewrite_files(&files)?;

    let mut total_modified = 0;
    let mut total_wrapped_lines = 0;

    for result in &results {
        total_wrapped_lines += result.wrapped_lines;
        if result.modified {
            total_modified += 1;
            let file = result.file_path.display().to_string();
            if check_only {
                println!("{}", ui_str::format_needs_wrapping(&file));
            } else if cli_arg.verbose {
                println!("{}", ui_str::format_modified(&file));
            }
        }
    }

    println!(
        "\n{}",
        ui_str::format_summary(results.len(), total_modified, total_wrapped_lines)
    );

    if check_only {
        if total_modified > 0 {
            eprintln!("\n{}", ui_str::CHECK_MODE_NEEDS_WRAPPING);
            process::exit(1);
        }
        println!("{}", ui_str::ALL_PROPERLY_WRAPPED);
    }

    Ok(())
}
