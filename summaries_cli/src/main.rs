// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Regenerates `summaries.html` from the posts in the parent directory.
//! Run it from the directory the page should be written to.
use summaries_core::assemble::build_summaries;
use summaries_core::config::SummaryConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let config = SummaryConfig::default();
    log::info!(
        "Building {} from posts in {}",
        config.output_path.display(),
        config.input_dir.display()
    );

    let report = build_summaries(&config).map_err(|e| e as Box<dyn std::error::Error>)?;

    println!("{report}");

    Ok(())
}
