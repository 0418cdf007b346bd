//! Atomic file replacement
//!
//! Writes land in a sibling `<name>.tmp` file that is synced and then renamed
//! over the target, so the target always holds either the old or the new
//! contents in full.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{PhonebookError, PhonebookResult};

/// Replace `path` with `bytes`, creating parent directories as needed
pub fn write_atomic(path: &Path, bytes: &[u8]) -> PhonebookResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let result = File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_path, path));

    result.map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_error("write", path, e)
    })
}

/// Serialize `data` as pretty JSON and replace `path` with it
pub fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> PhonebookResult<()> {
    let mut bytes = serde_json::to_vec_pretty(data)?;
    bytes.push(b'\n');
    write_atomic(path, &bytes)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn storage_error(action: &str, path: &Path, err: std::io::Error) -> PhonebookError {
    PhonebookError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}
