//! Injector configuration.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::link::LinkFormat;

/// Default notebook search root.
pub const DEFAULT_ROOT: &str = "source";

/// Default repository link base (owner/repo/blob/branch/).
pub const DEFAULT_GITHUB_BASE: &str = "OpenJij/OpenJijTutorial/blob/master/";

/// Default per-notebook read limit (64MB; notebooks embed images).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Configuration for [`LinkInjector`](crate::LinkInjector).
#[derive(Debug, Clone)]
pub struct InjectorConfig {
    /// Root directory; stripped from notebook paths to build link targets.
    pub root: PathBuf,
    /// Repository link base. Used verbatim as the URL path prefix.
    pub github_base: String,
    /// Which link markup to insert.
    pub link_format: LinkFormat,
    /// Maximum notebook size in bytes.
    pub max_file_size: u64,
    /// Process and report without writing anything.
    pub dry_run: bool,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            github_base: DEFAULT_GITHUB_BASE.to_string(),
            link_format: LinkFormat::default(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            dry_run: false,
        }
    }
}

impl InjectorConfig {
    /// Check the link base is usable as a URL path prefix.
    ///
    /// # Errors
    /// `EmptyBase` or `BaseMissingSeparator`; the base is never fixed up silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.github_base.is_empty() {
            return Err(ConfigError::EmptyBase);
        }
        if !self.github_base.ends_with('/') {
            return Err(ConfigError::BaseMissingSeparator(self.github_base.clone()));
        }
        Ok(())
    }
}
