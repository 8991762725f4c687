// crates/usecase/src/settings_io.rs
use draw_numbers_domain::DrawSettings;
use draw_numbers_ports::settings::{SettingsSnapshot, SettingsStore};
use draw_numbers_shared_kernel::Result;

/// Loads the persisted settings, falling back to defaults when nothing is
/// stored yet. Absent fields already defaulted at the snapshot level.
pub struct LoadSettings<'a> {
    store: &'a dyn SettingsStore,
}

impl<'a> LoadSettings<'a> {
    pub fn new(store: &'a dyn SettingsStore) -> Self {
        Self { store }
    }

    pub fn run(&self) -> Result<DrawSettings> {
        let snapshot = self.store.load()?.unwrap_or_default();
        Ok(snapshot_to_settings(&snapshot))
    }
}

/// Writes the current settings back through the persistence seam.
pub struct SaveSettings<'a> {
    store: &'a dyn SettingsStore,
}

impl<'a> SaveSettings<'a> {
    pub fn new(store: &'a dyn SettingsStore) -> Self {
        Self { store }
    }

    pub fn run(&self, settings: &DrawSettings) -> Result<()> {
        self.store.save(&settings_to_snapshot(settings))?;
        Ok(())
    }
}

pub fn snapshot_to_settings(snapshot: &SettingsSnapshot) -> DrawSettings {
    DrawSettings {
        min: snapshot.min_value,
        max: snapshot.max_value,
        count: snapshot.count_value,
        exclusion_enabled: snapshot.exclusion_enabled,
        excluded: DrawSettings::parse_excluded(&snapshot.excluded_numbers),
    }
}

pub fn settings_to_snapshot(settings: &DrawSettings) -> SettingsSnapshot {
    SettingsSnapshot {
        min_value: settings.min,
        max_value: settings.max,
        count_value: settings.count,
        exclusion_enabled: settings.exclusion_enabled,
        excluded_numbers: settings.excluded_text(),
    }
}
