// crates/infra/src/settings.rs
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use draw_numbers_ports::settings::{SettingsSnapshot, SettingsStore};
use draw_numbers_shared_kernel::{InfraResult, InfrastructureError};
use serde::{Deserialize, Serialize};

/// On-disk document: a single `[Settings]` table.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsDocument {
    #[serde(rename = "Settings", default)]
    settings: SettingsSnapshot,
}

/// Settings persisted as a TOML key-value file.
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> InfraResult<Option<SettingsSnapshot>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(InfrastructureError::SettingsRead {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };
        let document: SettingsDocument = toml::from_str(&text)?;
        Ok(Some(document.settings))
    }

    fn save(&self, snapshot: &SettingsSnapshot) -> InfraResult<()> {
        let document = SettingsDocument {
            settings: snapshot.clone(),
        };
        let text = toml::to_string_pretty(&document)?;
        write_atomically(&self.path, text.as_bytes()).map_err(|err| {
            InfrastructureError::SettingsWrite {
                path: self.path.clone(),
                source: err,
            }
        })
    }
}

/// Write via a sibling temp file and rename; the settings file is replaced
/// whole or not at all. Single-process usage is assumed, so a fixed temp
/// name cannot collide.
fn write_atomically(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = TomlSettingsStore::new(dir.path().join("draw_numbers.toml"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = TomlSettingsStore::new(dir.path().join("draw_numbers.toml"));
        let snapshot = SettingsSnapshot {
            min_value: -10,
            max_value: 10,
            count_value: 5,
            exclusion_enabled: true,
            excluded_numbers: "-3,0,7".to_string(),
        };

        store.save(&snapshot).expect("save succeeds");
        assert_eq!(store.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn absent_keys_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draw_numbers.toml");
        fs::write(&path, "[Settings]\nmaxValue = 49\n").unwrap();

        let store = TomlSettingsStore::new(&path);
        let snapshot = store.load().unwrap().expect("file exists");
        assert_eq!(snapshot.max_value, 49);
        assert_eq!(snapshot.min_value, 1);
        assert_eq!(snapshot.count_value, 10);
        assert!(!snapshot.exclusion_enabled);
        assert_eq!(snapshot.excluded_numbers, "");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draw_numbers.toml");
        fs::write(&path, "not toml at all [").unwrap();

        let store = TomlSettingsStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(InfrastructureError::SerializationError { .. })
        ));
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = TomlSettingsStore::new(dir.path().join("draw_numbers.toml"));

        store.save(&SettingsSnapshot::default()).unwrap();
        store
            .save(&SettingsSnapshot {
                count_value: 3,
                ..SettingsSnapshot::default()
            })
            .unwrap();

        let snapshot = store.load().unwrap().expect("file exists");
        assert_eq!(snapshot.count_value, 3);
    }
}
