#![allow(clippy::doc_markdown)]

//! nblink - "Open in Colab" link injection for notebook trees
//!
//! Scans a directory for notebooks and makes sure each one carries a Colab
//! link cell at index 1, built from the notebook's path relative to the root
//! and a configured repository link base.
//!
//! # Architecture
//!
//! ```text
//! nblink/src/
//! ├── lib.rs       # Re-exports (this file)
//! ├── error.rs     # NotebookError / DocumentError / ConfigError (thiserror)
//! ├── config.rs    # InjectorConfig + defaults
//! ├── notebook.rs  # Notebook document model
//! ├── link.rs      # Link detection, construction, insertion
//! ├── injector.rs  # Per-notebook read → inspect → write
//! ├── batch.rs     # Batch orchestration + reporting
//! ├── cli.rs       # clap command line (binary only)
//! └── main.rs      # Binary entry point
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use nblink::{BatchConfig, InjectorConfig, LinkInjector, TracingReporter, run_batch};
//!
//! let injector = LinkInjector::new(InjectorConfig::default())?;
//! let report = run_batch(&injector, &BatchConfig::default(), &mut TracingReporter);
//! println!("{}", report.summary_line());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod batch;
mod config;
mod error;
mod injector;
mod link;
mod notebook;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use batch::{
    BatchConfig, BatchFailure, BatchReport, OutputMode, Reporter, TracingReporter, run_batch,
};
pub use config::{DEFAULT_GITHUB_BASE, DEFAULT_MAX_FILE_SIZE, DEFAULT_ROOT, InjectorConfig};
pub use error::{ConfigError, DocumentError, NotebookError};
pub use injector::{LinkInjector, ProcessOutcome};
pub use link::{
    COLAB_BADGE_URL, LINK_CELL_INDEX, LinkFormat, build_link, colab_url, detect_existing_link,
    inject,
};
pub use notebook::{CellRef, Notebook};
