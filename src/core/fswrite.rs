//! Atomic file writes.
//!
//! Output is written to a sibling temp path and renamed into place, so a
//! failure partway through never leaves a truncated config behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_via_tmp(path: &Path, contents: &str, mode: Option<u32>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, contents)?;

    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp, fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

/// Write `contents` to `path` atomically.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    write_via_tmp(path, contents, None)
}

/// Write `contents` to `path` atomically with owner-only permissions.
pub fn write_atomic_private(path: &Path, contents: &str) -> io::Result<()> {
    write_via_tmp(path, contents, Some(0o600))
}
