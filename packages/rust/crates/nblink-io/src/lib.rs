#![allow(clippy::doc_markdown)]

//! nblink-io - Safe file I/O for notebook documents
//!
//! # Features
//!
//! - **Safety**: Binary detection & Size limits on read
//! - **Atomic writes**: Temp file + rename, never a half-written notebook
//! - **Discovery**: Recursive extension-filtered notebook collection
//!
//! # Architecture
//!
//! ```text
//! nblink-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & decoding
//! ├── sync.rs     # Read / atomic write
//! └── discover.rs # Notebook discovery & path normalization
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use nblink_io::{discover_files, read_text_safe, DiscoverOptions};
//!
//! for path in discover_files(Path::new("source"), &DiscoverOptions::default()) {
//!     let content = read_text_safe(&path, 64 * 1024 * 1024)?;
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod detect;
mod discover;
mod error;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use discover::{DiscoverOptions, discover_files, relative_slash_path};
pub use error::IoError;
pub use sync::{read_text_safe, write_text_atomic};

pub use detect::{decode_buffer, is_binary};
