//! Filesystem utilities for postsmith.
//!
//! Two write modes: atomic replacement for the config file, and create-new
//! writes for posts, which must never clobber an existing file.

pub mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{PostError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| PostError::io(format!("failed to create directory '{}'", dir.display()), e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Write `content` to `path`, which must not exist yet.
///
/// Returns `Ok(false)` without touching anything when the file already
/// exists, so the caller can pick another name.
pub fn write_new_file(path: &Path, content: &str) -> Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(PostError::io(
                format!("failed to create '{}'", path.display()),
                e,
            ));
        }
    };

    file.write_all(content.as_bytes())
        .map_err(|e| PostError::io(format!("failed to write '{}'", path.display()), e))?;
    Ok(true)
}
