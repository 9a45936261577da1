//! # File I/O Module
//!
//! Atomic writes for exported documents: write to a sibling `.tmp` file,
//! sync, then rename over the target. A failed export never leaves a
//! half-written PDF behind, and an existing file is replaced in one step.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{TopicError, TopicResult};

/// Write `bytes` to `path` atomically, replacing any existing file.
///
/// The process:
/// 1. Write to `<path>.tmp`
/// 2. Sync to disk (fsync)
/// 3. Rename `<path>.tmp` to `<path>`
///
/// # Example
///
/// ```rust,no_run
/// use topic_core::file_io::write_atomic;
/// use std::path::Path;
///
/// write_atomic(Path::new("topic_document.pdf"), b"%PDF-1.7")?;
/// # Ok::<(), topic_core::errors::TopicError>(())
/// ```
pub fn write_atomic(path: &Path, bytes: &[u8]) -> TopicResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        TopicError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    let written = tmp_file
        .write_all(bytes)
        .and_then(|_| tmp_file.sync_all())
        .map_err(|e| TopicError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()));
    if let Err(e) = written {
        drop(tmp_file);
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        TopicError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Temp file path used while writing `path`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("export"));
    name.push(".tmp");
    path.with_file_name(name)
}
