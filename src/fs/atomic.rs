//! Owner-only file writes.
//!
//! Kubeconfig files routinely carry client keys and bearer tokens, so they are
//! written with owner read/write permissions only (0600 on Unix).
//!
//! # Implementation Strategy
//!
//! 1. Follow `path` if it is a symlink, so the link survives and its target
//!    receives the content
//! 2. Create a uniquely named temporary sibling of the target (0600,
//!    exclusive create, never follows an existing entry)
//! 3. Write and fsync the content
//! 4. Rename it over the target
//!
//! A crash mid-write leaves the previous target untouched.

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Permission bits for secret-bearing files.
#[cfg(unix)]
pub const PRIVATE_MODE: u32 = 0o600;

/// Write bytes to `path`, replacing any existing file, readable only by the owner.
///
/// When `path` is a symlink the file it points to is replaced and the link
/// is kept. Missing parent directories are created.
///
/// # Returns
///
/// * `Ok(())` - The content is on disk at the (resolved) target
/// * `Err(Error::Io)` - Resolving, creating, writing or renaming failed
pub fn write_private<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let target = resolve_target(path.as_ref())?;

    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !parent.exists() {
        fs::create_dir_all(&parent).map_err(|e| {
            Error::io(
                format!("failed to create parent directory '{}'", parent.display()),
                e,
            )
        })?;
    }

    let temp = write_temp(&parent, content)?;

    temp.persist(&target).map_err(|e| {
        Error::io(format!("failed to replace '{}'", target.display()), e.error)
    })?;

    #[cfg(unix)]
    {
        if let Ok(dir) = File::open(&parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

/// The regular file that writing to `path` should replace.
///
/// A dangling symlink resolves to where it points, one hop, so the write
/// creates the missing target as `open(2)` would.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(_) => return Ok(path.to_path_buf()),
    };
    if !meta.file_type().is_symlink() {
        return Ok(path.to_path_buf());
    }

    match fs::canonicalize(path) {
        Ok(real) => Ok(real),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let link = fs::read_link(path).map_err(|e| {
                Error::io(format!("failed to read symlink '{}'", path.display()), e)
            })?;
            let base = path.parent().unwrap_or(Path::new("."));
            Ok(base.join(link))
        }
        Err(e) => Err(Error::io(
            format!("failed to resolve symlink '{}'", path.display()),
            e,
        )),
    }
}

fn write_temp(dir: &Path, content: &[u8]) -> Result<NamedTempFile> {
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
        Error::io(
            format!("failed to create temporary file in '{}'", dir.display()),
            e,
        )
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(fs::Permissions::from_mode(PRIVATE_MODE))
            .map_err(|e| Error::io("failed to restrict temporary file permissions", e))?;
    }

    temp.write_all(content)
        .map_err(|e| Error::io("failed to write to temporary file", e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io("failed to sync temporary file to disk", e))?;

    Ok(temp)
}
