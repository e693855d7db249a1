use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::model::Groups;

pub fn resolve_ledger_home(home_override: Option<&Path>) -> LedgerResult<PathBuf> {
    let candidate = match home_override {
        Some(path) => path.to_path_buf(),
        None => {
            if let Some(override_path) = std::env::var_os("CAIXA_HOME") {
                PathBuf::from(override_path)
            } else if let Some(home_path) = home::home_dir() {
                home_path.join(".caixa")
            } else {
                return Err(LedgerError::ledger_io(
                    Path::new("."),
                    "Could not resolve a home directory for the ledger.",
                ));
            }
        }
    };

    absolutize(&candidate)
}

pub fn ensure_ledger_directory(path: &Path) -> LedgerResult<()> {
    fs::create_dir_all(path).map_err(|error| map_io_error(path, &error))?;
    set_private_permissions_best_effort(path);
    Ok(())
}

pub fn groups_path(home: &Path) -> PathBuf {
    home.join("groups.json")
}

pub fn daily_marker_path(home: &Path) -> PathBuf {
    home.join("daily_check.json")
}

/// Loads the whole groups document. A missing file is an empty
/// document, not an error; unreadable or malformed JSON is.
pub fn load_groups(home: &Path) -> LedgerResult<Groups> {
    let path = groups_path(home);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Groups::default());
        }
        Err(error) => return Err(map_io_error(&path, &error)),
    };

    serde_json::from_str(&raw).map_err(|error| LedgerError::ledger_corrupt(&path, &error.to_string()))
}

/// Writes the whole groups document as pretty JSON. The document is
/// written to a sibling temp file and renamed into place, so a crash
/// mid-write never leaves a half-serialized ledger behind.
pub fn save_groups(home: &Path, groups: &Groups) -> LedgerResult<()> {
    let path = groups_path(home);
    let serialized = serde_json::to_string_pretty(groups)
        .map_err(|error| LedgerError::internal_serialization(&error.to_string()))?;
    write_replacing(&path, &serialized)
}

/// Per-operator daily-clear bookkeeping, kept outside the ledger
/// document so it never travels with the data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyMarker {
    pub last_checked: String,
}

pub fn load_daily_marker(home: &Path) -> LedgerResult<DailyMarker> {
    let path = daily_marker_path(home);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Ok(DailyMarker::default());
        }
        Err(error) => return Err(map_io_error(&path, &error)),
    };

    serde_json::from_str(&raw).map_err(|error| LedgerError::ledger_corrupt(&path, &error.to_string()))
}

pub fn save_daily_marker(home: &Path, marker: &DailyMarker) -> LedgerResult<()> {
    let path = daily_marker_path(home);
    let serialized = serde_json::to_string_pretty(marker)
        .map_err(|error| LedgerError::internal_serialization(&error.to_string()))?;
    write_replacing(&path, &serialized)
}

pub fn map_io_error(path: &Path, error: &std::io::Error) -> LedgerError {
    LedgerError::ledger_io(path, &error.to_string())
}

fn write_replacing(path: &Path, contents: &str) -> LedgerResult<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, contents).map_err(|error| map_io_error(&temp_path, &error))?;
    fs::rename(&temp_path, path).map_err(|error| map_io_error(path, &error))
}

fn absolutize(path: &Path) -> LedgerResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| LedgerError::ledger_io(path, &error.to_string()))
}

#[cfg(unix)]
fn set_private_permissions_best_effort(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o700));
}

#[cfg(not(unix))]
fn set_private_permissions_best_effort(_path: &Path) {}
