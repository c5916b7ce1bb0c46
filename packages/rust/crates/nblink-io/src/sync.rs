//! Synchronous file I/O operations.

use std::fs as std_fs;
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::detect::decode_buffer;
use crate::error::IoError;

/// Read text from a file with size and binary checks.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Errors
/// `NotFound` when the path cannot be stat'ed, `TooLarge` above `max_bytes`,
/// `BinaryFile` / `Encoding` for non-text content, `System` otherwise.
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = std_fs::metadata(path)
        .map_err(|_| IoError::NotFound(path.to_string_lossy().to_string()))?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = std_fs::File::open(path)?;
    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut buffer)?;

    decode_buffer(buffer)
}

/// Write text to `path` atomically.
///
/// Content goes to a temporary file in the target's directory which is then
/// renamed over `path`. Missing parent directories are created.
///
/// # Errors
/// Returns `IoError::System` if the directory, temp file, write or rename fails.
pub fn write_text_atomic<P, C>(path: P, contents: C) -> Result<(), IoError>
where
    P: AsRef<Path>,
    C: AsRef<[u8]>,
{
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std_fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    let contents = contents.as_ref();
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    // Temp files are created 0600; keep the target's mode instead.
    match std_fs::metadata(path) {
        Ok(existing) => tmp.as_file().set_permissions(existing.permissions())?,
        Err(_) => set_default_permissions(tmp.as_file())?,
    }
    tmp.persist(path).map_err(|e| IoError::System(e.error))?;

    tracing::trace!(path = %path.display(), bytes = contents.len(), "atomic write");
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(file: &std_fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std_fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &std_fs::File) -> std::io::Result<()> {
    Ok(())
}
