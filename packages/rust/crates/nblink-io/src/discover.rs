//! Notebook discovery.
//!
//! Walks a root directory recursively and collects files by extension.

use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Options for file discovery.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// File extensions to include (e.g., `[".ipynb"]`)
    pub extensions: Vec<String>,
    /// Maximum file size in bytes (None for unlimited)
    pub max_file_size: Option<u64>,
    /// Skip hidden files and directories (e.g. `.ipynb_checkpoints`)
    pub skip_hidden: bool,
    /// Skip directories by name
    pub skip_dirs: Vec<String>,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            extensions: vec![".ipynb".to_string()],
            max_file_size: None,
            skip_hidden: true,
            skip_dirs: vec![
                ".ipynb_checkpoints".to_string(),
                "node_modules".to_string(),
                "target".to_string(),
            ],
        }
    }
}

/// Discover files recursively under `root` matching the configured extensions.
///
/// Returned paths include the `root` prefix and are sorted for stable log
/// output. A missing or non-directory root yields an empty list.
/// Symlinks are not followed and symlinked files are excluded, so an
/// in-place rewrite never replaces a link with a regular file.
/// Files above `max_file_size` are excluded; leave it `None` to have the
/// reader report them instead.
#[must_use]
pub fn discover_files(root: &Path, options: &DiscoverOptions) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "discovery root is not a directory");
        return Vec::new();
    }

    let extensions: Vec<String> = options
        .extensions
        .iter()
        .map(|e| normalize_extension(e))
        .collect();

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry, options))
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| has_extension(entry.path(), &extensions))
        .filter(|entry| {
            let file_type = entry.file_type();
            if file_type.is_symlink() {
                tracing::debug!(path = %entry.path().display(), "skipping symlinked file");
            }
            file_type.is_file()
        })
        .filter(|entry| match options.max_file_size {
            Some(max) => match entry.metadata() {
                Ok(metadata) => metadata.len() <= max,
                Err(e) => {
                    tracing::warn!(
                        path = %entry.path().display(),
                        error = %e,
                        "cannot stat file"
                    );
                    false
                }
            },
            None => true,
        })
        .map(DirEntry::into_path)
        .collect();

    files.sort();
    tracing::debug!(root = %root.display(), count = files.len(), "discovered files");
    files
}

/// Path of `path` relative to `root`, joined with forward slashes.
///
/// Returns `None` when `path` is not under `root`.
#[must_use]
pub fn relative_slash_path(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let joined = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    Some(joined)
}

fn is_excluded(entry: &DirEntry, options: &DiscoverOptions) -> bool {
    let name = entry.file_name().to_string_lossy();

    if options.skip_hidden && name.starts_with('.') {
        return true;
    }

    entry.file_type().is_dir()
        && options
            .skip_dirs
            .iter()
            .any(|skip| skip.as_str() == name.as_ref())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .is_some_and(|ext| extensions.contains(&ext))
}

/// Normalize extension to lowercase with dot prefix.
fn normalize_extension(ext: &str) -> String {
    let mut ext = ext.to_lowercase();
    if !ext.starts_with('.') {
        ext = format!(".{ext}");
    }
    ext
}
