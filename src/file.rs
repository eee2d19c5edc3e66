//! Loading and saving the substitution target.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::buffer::Buffer;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("could not read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    NotUtf8 { path: PathBuf },

    #[error("could not write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read `path` into a buffer, validating UTF-8.
pub fn load(path: &Path) -> Result<Buffer, FileError> {
    let bytes = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| FileError::NotUtf8 {
        path: path.to_path_buf(),
    })?;
    Ok(Buffer::from_text(&text))
}

/// Write the buffer back to `path`, atomically and in place.
///
/// The buffer text is written byte for byte; no trailing newline is
/// added or removed.
pub fn save(path: &Path, buffer: &Buffer) -> Result<(), FileError> {
    atomic_write(path, buffer.to_text().as_bytes()).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    // Update mtime so editors and file watchers notice the rewrite.
    let now = filetime::FileTime::now();
    filetime::set_file_mtime(path, now).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Atomic file write: tempfile in the same directory, fsync, rename.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), std::io::Error> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
