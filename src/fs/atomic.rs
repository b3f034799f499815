//! Atomic output writes.
//!
//! A rendered prompt written with `--output` is first written to a sibling
//! temporary file, synced, then renamed over the target. Readers watching the
//! output path see either the previous prompt or the complete new one.
//!
//! The temporary file is named `.{filename}.tmp` and lives in the target's
//! directory, so the rename never crosses filesystems.

use crate::error::{GenpromptError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a rendered prompt to `path`.
///
/// Missing parent directories are created. A trailing newline is appended
/// when `content` does not already end with one.
pub fn write_prompt_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            GenpromptError::Io(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut bytes = content.as_bytes().to_vec();
    if !content.ends_with('\n') {
        bytes.push(b'\n');
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, &bytes)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GenpromptError::Io(format!("failed to replace '{}': {}", path.display(), e))
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            GenpromptError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let result = File::create(path).and_then(|mut file| {
        file.write_all(content)?;
        file.sync_all()
    });

    result.map_err(|e| {
        let _ = fs::remove_file(path);
        GenpromptError::Io(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        ))
    })
}
