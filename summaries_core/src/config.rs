// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use std::path::PathBuf;

/// Directory scanned for posts, relative to the working directory.
pub const INPUT_DIR: &str = "..";
/// Name of the generated page, written to the working directory.
pub const OUTPUT_FILE_NAME: &str = "summaries.html";

/// Where posts are read from and where the summary page is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    /// Candidates whose absolute path equals this are not read.
    ///
    /// Defaults to the bare output file name, which an absolute candidate
    /// path never equals, so a previously generated page in `input_dir` is
    /// picked up as a post on the next run.
    pub excluded_path: PathBuf,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_DIR),
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
            excluded_path: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SummaryConfig::default();
        assert_eq!(config.input_dir, PathBuf::from(".."));
        assert_eq!(config.output_path, PathBuf::from("summaries.html"));
        assert_eq!(config.excluded_path, PathBuf::from("summaries.html"));
    }
}
