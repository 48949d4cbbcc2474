// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::BoxError;
use crate::extract::extract_post_summary;
use crate::post::PostSummary;
use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};

/// File names treated as posts.
const POST_PATTERN: &str = "*.html";

/// Lists the `.html` files in `input_dir` as absolute paths.
///
/// Only the file name is matched, case-insensitively, so the directory path
/// itself is never treated as a pattern. A candidate is dropped only if its
/// absolute path equals `excluded` exactly. Results are sorted, so repeated
/// runs see the same sequence.
pub fn list_candidate_files(input_dir: &Path, excluded: &Path) -> Result<Vec<PathBuf>, BoxError> {
    let pattern = Pattern::new(POST_PATTERN)?;
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {e}", input_dir.display());
                continue;
            }
        };

        let file_name = entry.file_name();
        if !pattern.matches_with(&file_name.to_string_lossy(), options) {
            continue;
        }

        let path = absolute_path(&entry.path())?;
        if path != excluded {
            candidates.push(path);
        }
    }

    candidates.sort();
    Ok(candidates)
}

/// Extracts a summary from each path, skipping the ones that fail.
///
/// Returns the summaries in input order together with the number skipped.
pub fn load_post_summaries(paths: &[PathBuf]) -> (Vec<PostSummary>, usize) {
    let mut summaries = Vec::with_capacity(paths.len());
    let mut skipped = 0;

    for path in paths {
        match extract_post_summary(path) {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                log::error!("Error reading {}: {e}", path.display());
                skipped += 1;
            }
        }
    }

    (summaries, skipped)
}

/// Writes the page to `path` as UTF-8, replacing any existing file.
pub fn write_page(path: &Path, page: &str) -> Result<(), BoxError> {
    std::fs::write(path, page)?;
    log::debug!("Wrote {} bytes to {}", page.len(), path.display());
    Ok(())
}

/// Makes `path` absolute and folds away `.` and `..` without touching the filesystem.
fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalised = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalised.pop();
            }
            other => normalised.push(other),
        }
    }
    Ok(normalised)
}
