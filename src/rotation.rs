// Rotation writer: never overwrite a previous day's file. Any existing file
// at the output path is renamed into <backup_root>/<stamp>/ first; only a
// successful move is followed by the new write.

use std::path::{Path, PathBuf};

use crate::error::DayError;
use crate::models::StatisticsDocument;

/// Wall-clock stamp naming one run's backup subdirectory, `YYYYMMDDHHMMSS`.
pub fn backup_stamp<Tz: chrono::TimeZone>(now: chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y%m%d%H%M%S").to_string()
}

/// Write `doc` to `output_path`, moving any pre-existing file into
/// `<backup_root>/<stamp>/<filename>` beforehand. Returns the backup path
/// when a prior file was preserved.
///
/// If the move fails the write is not attempted: a half-rotated state must
/// never cost the operator the only copy of prior data.
pub fn write_with_rotation(
    output_path: &Path,
    doc: &StatisticsDocument,
    backup_root: &Path,
    stamp: &str,
) -> Result<Option<PathBuf>, DayError> {
    let preserved = if output_path.exists() {
        Some(rotate_existing(output_path, backup_root, stamp)?)
    } else {
        None
    };

    let json = serde_json::to_string_pretty(doc).map_err(|e| DayError::Write {
        path: output_path.to_path_buf(),
        source: std::io::Error::other(e),
    })?;
    std::fs::write(output_path, json).map_err(|e| DayError::Write {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(preserved)
}

/// Move the file at `output_path` into the stamped backup directory, keeping
/// its filename. A rename, not copy-then-delete: the file is either at its
/// old path or its backup path at every point.
fn rotate_existing(
    output_path: &Path,
    backup_root: &Path,
    stamp: &str,
) -> Result<PathBuf, DayError> {
    let backup_dir = backup_root.join(stamp);
    let rotation_err = |source: std::io::Error| DayError::Rotation {
        backup: backup_dir.clone(),
        source,
    };

    std::fs::create_dir_all(&backup_dir).map_err(rotation_err)?;
    let file_name = output_path
        .file_name()
        .ok_or_else(|| rotation_err(std::io::Error::other("output path has no file name")))?;
    let backup_path = backup_dir.join(file_name);
    std::fs::rename(output_path, &backup_path).map_err(rotation_err)?;
    Ok(backup_path)
}
