//! Small on-disk cache, one directory per session manifest.
//!
//! Entries live under `.cache/` keyed by a hash of the manifest path, as
//! tiny TOML files: the intensity multiplier (with an expiry matching the
//! cookie it replaces) and the last viewed element. Reads and writes are
//! best-effort; a missing or unreadable entry just means "no cache".

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

pub const CACHE_DIR: &str = ".cache";

/// Lifetime of a stored intensity multiplier, in seconds (one day).
pub const MULTIPLIER_MAX_AGE_SECS: u64 = 86_400;

pub fn hash_dir(manifest_path: &Path) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(manifest_path.as_os_str().to_string_lossy().as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    Path::new(CACHE_DIR).join(hash)
}

#[derive(Serialize, Deserialize)]
struct MultiplierEntry {
    value: f64,
    saved_at: u64,
}

#[derive(Serialize, Deserialize)]
struct ResumeEntry {
    element: usize,
}

/// Multiplier value an entry yields at `now` (seconds since the epoch).
/// Expired entries fall back to the neutral multiplier.
fn multiplier_from_entry(entry: &MultiplierEntry, now_secs: u64) -> f64 {
    if now_secs.saturating_sub(entry.saved_at) > MULTIPLIER_MAX_AGE_SECS {
        1.0
    } else {
        entry.value
    }
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Load the persisted intensity multiplier for a manifest. Absent, expired,
/// or malformed entries all read as 1.0.
pub fn load_multiplier(manifest_path: &Path) -> f64 {
    let path = multiplier_path(manifest_path);
    let Ok(data) = fs::read_to_string(&path) else {
        return 1.0;
    };
    let Ok(entry) = toml::from_str::<MultiplierEntry>(&data) else {
        debug!(path = %path.display(), "Ignoring malformed multiplier entry");
        return 1.0;
    };
    multiplier_from_entry(&entry, epoch_secs())
}

/// Persist the intensity multiplier. Errors are ignored to keep the UI
/// responsive.
pub fn save_multiplier(manifest_path: &Path, value: f64) {
    let entry = MultiplierEntry {
        value,
        saved_at: epoch_secs(),
    };
    write_entry(&multiplier_path(manifest_path), &entry);
}

/// Last element the annotator was viewing, if recorded.
pub fn load_resume_element(manifest_path: &Path) -> Option<usize> {
    let data = fs::read_to_string(resume_path(manifest_path)).ok()?;
    let entry: ResumeEntry = toml::from_str(&data).ok()?;
    Some(entry.element)
}

pub fn save_resume_element(manifest_path: &Path, element: usize) {
    write_entry(&resume_path(manifest_path), &ResumeEntry { element });
}

fn write_entry<T: Serialize>(path: &Path, entry: &T) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(contents) = toml::to_string(entry) {
        let _ = fs::write(path, contents);
    }
}

fn multiplier_path(manifest_path: &Path) -> PathBuf {
    hash_dir(manifest_path).join("multiplier.toml")
}

fn resume_path(manifest_path: &Path) -> PathBuf {
    hash_dir(manifest_path).join("resume.toml")
}
