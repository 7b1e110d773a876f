//! Download state tracking.

use std::path::PathBuf;

use crate::media::ImageExt;

/// Terminal state of one staged line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Saved under the given extension.
    Saved(ImageExt),
    /// Both attempts failed.
    GaveUp,
}

/// Per-run download state.
#[derive(Debug, Default)]
pub struct DownloadState {
    pub target_dir: PathBuf,

    /// Outcome of every staged line, by index - 1.
    pub outcomes: Vec<LineOutcome>,

    // Statistics
    pub saved_first_try: u64,
    pub saved_fallback: u64,
    pub gave_up: u64,
}

impl DownloadState {
    /// Create a new download state for a target directory.
    pub fn new(target_dir: PathBuf) -> Self {
        Self {
            target_dir,
            ..Default::default()
        }
    }

    /// Record the outcome of the next index.
    pub fn record(&mut self, outcome: LineOutcome) {
        match outcome {
            LineOutcome::Saved(ImageExt::Jpg) => self.saved_first_try += 1,
            LineOutcome::Saved(ImageExt::Png) => self.saved_fallback += 1,
            LineOutcome::GaveUp => self.gave_up += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Number of indices attempted.
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Get total downloaded count.
    pub fn total_downloaded(&self) -> u64 {
        self.saved_first_try + self.saved_fallback
    }
}
