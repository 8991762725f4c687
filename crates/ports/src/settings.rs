// crates/ports/src/settings.rs
use draw_numbers_shared_kernel::InfraResult;
use serde::{Deserialize, Serialize};

/// Wire shape of the persisted settings: the exact key names and value
/// encodings of the `[Settings]` table. The exclusion list stays in its
/// comma-separated text form here; parsing happens at the use-case boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub min_value: i64,
    pub max_value: i64,
    pub count_value: u32,
    pub exclusion_enabled: bool,
    pub excluded_numbers: String,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            min_value: 1,
            max_value: 100,
            count_value: 10,
            exclusion_enabled: false,
            excluded_numbers: String::new(),
        }
    }
}

/// Persistence seam for the settings file.
pub trait SettingsStore {
    /// Load the stored snapshot, or `None` when nothing is persisted yet.
    fn load(&self) -> InfraResult<Option<SettingsSnapshot>>;

    fn save(&self, snapshot: &SettingsSnapshot) -> InfraResult<()>;
}
