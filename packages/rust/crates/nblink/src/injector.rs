//! Per-notebook link injection.
//!
//! Load → detect → build → inject → write. Each call is independent of
//! every other; no state is carried between notebooks.

use std::path::Path;

use nblink_io::{IoError, read_text_safe, relative_slash_path, write_text_atomic};
use serde::Serialize;

use crate::config::InjectorConfig;
use crate::error::{ConfigError, NotebookError};
use crate::link::{build_link, detect_existing_link, inject};
use crate::notebook::Notebook;

/// Terminal state of a successfully processed notebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessOutcome {
    /// Link inserted and the notebook written.
    Written,
    /// A link was already present; nothing written.
    Skipped,
    /// Dry run: a link would have been inserted.
    WouldWrite,
}

/// Applies Colab links to notebooks according to an [`InjectorConfig`].
#[derive(Debug, Clone)]
pub struct LinkInjector {
    config: InjectorConfig,
}

impl LinkInjector {
    /// Create an injector from a validated configuration.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] from [`InjectorConfig::validate`].
    pub fn new(config: InjectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// Read and parse the notebook at `path`.
    ///
    /// # Errors
    /// `UnreadableFile` for I/O failures, `MalformedDocument` for bad content.
    pub fn load(&self, path: &Path) -> Result<Notebook, NotebookError> {
        let text = read_text_safe(path, self.config.max_file_size).map_err(|source| {
            NotebookError::UnreadableFile {
                path: path.display().to_string(),
                source,
            }
        })?;

        Notebook::parse(&text).map_err(|source| NotebookError::MalformedDocument {
            path: path.display().to_string(),
            source,
        })
    }

    /// Ensure the notebook at `path` has a Colab link, writing the result to
    /// `output_path` (which may equal `path`).
    ///
    /// Already-linked notebooks are skipped without any write. `path` must
    /// lie under the configured root.
    ///
    /// # Errors
    /// Any [`NotebookError`]; the failure concerns this notebook only.
    pub fn process(
        &self,
        path: &Path,
        output_path: &Path,
    ) -> Result<ProcessOutcome, NotebookError> {
        let relative = relative_slash_path(path, &self.config.root).ok_or_else(|| {
            NotebookError::OutsideRoot {
                path: path.display().to_string(),
                root: self.config.root.display().to_string(),
            }
        })?;
        let mut notebook = self.load(path)?;

        if detect_existing_link(&notebook) {
            tracing::debug!(path = %path.display(), "colab link already present");
            return Ok(ProcessOutcome::Skipped);
        }

        let link = build_link(&self.config.github_base, &relative, self.config.link_format);
        tracing::debug!(path = %path.display(), %relative, "inserting colab link");
        inject(&mut notebook, link);

        if self.config.dry_run {
            return Ok(ProcessOutcome::WouldWrite);
        }

        let write_failure = |source: IoError| NotebookError::WriteFailure {
            path: output_path.display().to_string(),
            source,
        };
        let bytes = notebook
            .to_pretty_bytes()
            .map_err(|e| write_failure(IoError::System(e.into())))?;
        write_text_atomic(output_path, bytes).map_err(write_failure)?;

        Ok(ProcessOutcome::Written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_new_rejects_invalid_base() {
        let config = InjectorConfig {
            github_base: "no/trailing/slash".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            LinkInjector::new(config),
            Err(ConfigError::BaseMissingSeparator(_))
        ));
    }

    #[test]
    fn test_process_outside_root() {
        let dir = TempDir::new().expect("Create temp dir");
        let path = dir.path().join("nb.ipynb");
        std::fs::write(&path, r#"{"cells": []}"#).expect("Write notebook");

        let injector = LinkInjector::new(InjectorConfig {
            root: PathBuf::from("source"),
            ..Default::default()
        })
        .expect("valid config");

        let result = injector.process(&path, &path);
        assert!(matches!(result, Err(NotebookError::OutsideRoot { .. })));
        assert_eq!(
            std::fs::read_to_string(&path).expect("Read notebook"),
            r#"{"cells": []}"#
        );
    }

    #[test]
    fn test_process_unreadable() {
        let dir = TempDir::new().expect("Create temp dir");
        let injector = LinkInjector::new(InjectorConfig {
            root: dir.path().to_path_buf(),
            ..Default::default()
        })
        .expect("valid config");

        let missing = dir.path().join("missing.ipynb");
        let result = injector.process(&missing, &missing);
        assert!(matches!(
            result,
            Err(NotebookError::UnreadableFile {
                source: IoError::NotFound(_),
                ..
            })
        ));
    }
}
