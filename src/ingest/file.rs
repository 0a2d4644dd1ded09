use crate::config::{DEFAULT_CONFIG_FILE, LOCAL_CONFIG_DIR};
use crate::error::{ReadinessError, Result};
use crate::types::snapshot::MetadataSnapshot;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SNAPSHOT_EXTENSIONS: [&str; 2] = ["json", "toml"];

pub fn load_snapshot(path: &Path) -> Result<MetadataSnapshot> {
    if !path.exists() {
        return Err(ReadinessError::PathNotFound(path.display().to_string()));
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let content = std::fs::read_to_string(path)?;
    match extension.as_str() {
        "json" => serde_json::from_str(&content)
            .map_err(|e| ReadinessError::SnapshotParse(format!("{}: {}", path.display(), e))),
        "toml" => toml::from_str(&content)
            .map_err(|e| ReadinessError::SnapshotParse(format!("{}: {}", path.display(), e))),
        _ => Err(ReadinessError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Snapshot files under `root`, sorted by path. A file path is returned as is.
///
/// The project config file and the local config directory at `root` are not
/// snapshots and are skipped.
pub fn discover_snapshots(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }
    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_config_entry(root, entry.path()))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| is_snapshot_file(path))
        .collect::<Vec<_>>();
    files.sort();
    files
}

fn is_config_entry(root: &Path, path: &Path) -> bool {
    path == root.join(DEFAULT_CONFIG_FILE) || path == root.join(LOCAL_CONFIG_DIR)
}

fn is_snapshot_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SNAPSHOT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Dataset name shown in reports: the file stem.
pub fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(ToString::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
