// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::BoxError;
use crate::config::SummaryConfig;
use crate::file_io::{list_candidate_files, load_post_summaries, write_page};
use crate::render::{render_entries, render_page};
use std::fmt;
use std::path::PathBuf;

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output_path: PathBuf,
    /// Number of `<li>` cards written.
    pub entries: usize,
    /// Candidates that could not be read.
    pub skipped: usize,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✅ Created {} with {} entries.",
            self.output_path.display(),
            self.entries
        )
    }
}

/// Scans `config.input_dir` for posts and writes the summary page.
///
/// Unreadable posts are logged and left out. Failing to list the input
/// directory or to write the page aborts the build.
pub fn build_summaries(config: &SummaryConfig) -> Result<BuildReport, BoxError> {
    let candidates = list_candidate_files(&config.input_dir, &config.excluded_path)?;
    log::debug!(
        "Found {} candidate posts in {}",
        candidates.len(),
        config.input_dir.display()
    );

    let (summaries, skipped) = load_post_summaries(&candidates);
    if skipped > 0 {
        log::warn!("Skipped {skipped} unreadable posts");
    }

    let page = render_page(&render_entries(&summaries));
    write_page(&config.output_path, &page)?;

    Ok(BuildReport {
        output_path: config.output_path.clone(),
        entries: summaries.len(),
        skipped,
    })
}
