//! Batch orchestration.
//!
//! Collects notebooks under the injector's root and processes them one by
//! one. A failing notebook is reported and counted; the batch carries on.

use std::path::{Path, PathBuf};

use nblink_io::{DiscoverOptions, discover_files, relative_slash_path};
use serde::Serialize;

use crate::error::{ConfigError, NotebookError};
use crate::injector::{LinkInjector, ProcessOutcome};

/// Where processed notebooks are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Overwrite each source notebook.
    #[default]
    InPlace,
    /// Write to `<dir>/<path relative to root>`, leaving sources untouched.
    Mirror(PathBuf),
}

impl OutputMode {
    /// Output path for the notebook at `path` found under `root`.
    ///
    /// `None` in mirror mode when `path` is not under `root`.
    #[must_use]
    pub fn output_path(&self, path: &Path, root: &Path) -> Option<PathBuf> {
        match self {
            Self::InPlace => Some(path.to_path_buf()),
            Self::Mirror(dir) => relative_slash_path(path, root).map(|rel| dir.join(rel)),
        }
    }
}

/// Configuration for batch runs.
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Which files count as notebooks.
    pub discover: DiscoverOptions,
    /// Where results go.
    pub output: OutputMode,
}

impl BatchConfig {
    /// # Errors
    /// `EmptyExtensions` when no notebook extension is configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discover.extensions.is_empty() {
            return Err(ConfigError::EmptyExtensions);
        }
        Ok(())
    }
}

/// A notebook that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    /// Notebook path.
    pub path: String,
    /// Rendered error.
    pub error: String,
}

/// Aggregate result of a batch run.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    /// Number of notebooks discovered
    pub scanned: usize,
    /// Notebooks that received a link
    pub written: Vec<String>,
    /// Notebooks that would receive a link (dry run)
    pub would_write: Vec<String>,
    /// Notebooks that already had a link
    pub skipped: Vec<String>,
    /// Notebooks that failed
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    /// True if any notebook failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// One-line totals for the end of a run.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "scanned: {}, written: {}, skipped: {}, failed: {}",
            self.scanned,
            self.written.len(),
            self.skipped.len(),
            self.failed.len()
        );
        if !self.would_write.is_empty() {
            line.push_str(&format!(", would write: {}", self.would_write.len()));
        }
        line
    }
}

/// Receives per-notebook events from [`run_batch`].
pub trait Reporter {
    /// A notebook reached a successful terminal state.
    fn on_outcome(&mut self, path: &Path, outcome: ProcessOutcome);

    /// A notebook failed.
    fn on_failure(&mut self, path: &Path, error: &NotebookError);

    /// The batch finished.
    fn on_finish(&mut self, _report: &BatchReport) {}
}

/// [`Reporter`] that emits `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn on_outcome(&mut self, path: &Path, outcome: ProcessOutcome) {
        match outcome {
            ProcessOutcome::Written => tracing::info!(path = %path.display(), "added colab link"),
            ProcessOutcome::WouldWrite => {
                tracing::info!(path = %path.display(), "would add colab link (dry run)");
            }
            ProcessOutcome::Skipped => {
                tracing::debug!(path = %path.display(), "skipped, link present");
            }
        }
    }

    fn on_failure(&mut self, path: &Path, error: &NotebookError) {
        tracing::warn!(path = %path.display(), error = %error, "failed to process notebook");
    }

    fn on_finish(&mut self, report: &BatchReport) {
        tracing::info!(
            scanned = report.scanned,
            written = report.written.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "batch complete"
        );
    }
}

/// Process every notebook under the injector's root.
///
/// Notebooks are handled sequentially; a failure is recorded in the report
/// and passed to `reporter`, never propagated.
pub fn run_batch(
    injector: &LinkInjector,
    config: &BatchConfig,
    reporter: &mut dyn Reporter,
) -> BatchReport {
    let root = injector.config().root.as_path();
    let files = discover_files(root, &config.discover);
    if files.is_empty() {
        tracing::warn!(root = %root.display(), "no notebooks found");
    }

    let mut report = BatchReport {
        scanned: files.len(),
        ..Default::default()
    };

    for path in files {
        let display = path.display().to_string();
        let result = match config.output.output_path(&path, root) {
            Some(output_path) => injector.process(&path, &output_path),
            None => Err(NotebookError::OutsideRoot {
                path: display.clone(),
                root: root.display().to_string(),
            }),
        };

        match result {
            Ok(outcome) => {
                reporter.on_outcome(&path, outcome);
                match outcome {
                    ProcessOutcome::Written => report.written.push(display),
                    ProcessOutcome::WouldWrite => report.would_write.push(display),
                    ProcessOutcome::Skipped => report.skipped.push(display),
                }
            }
            Err(error) => {
                reporter.on_failure(&path, &error);
                report.failed.push(BatchFailure {
                    path: display,
                    error: error.to_string(),
                });
            }
        }
    }

    reporter.on_finish(&report);
    report
}
