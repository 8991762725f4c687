// crates/core/src/bootstrap.rs
use std::path::Path;

use chrono::Local;
use draw_numbers_domain::{DrawRecord, DrawSettings};
use draw_numbers_infra::{FileHistorySink, ThreadRngSource, TomlSettingsStore};
use draw_numbers_ports::random::RandomSource;
use draw_numbers_shared_kernel::{InfraResult, Result};
use draw_numbers_usecase::{DrawNumbers, DrawOutput, LoadSettings, RecordDraw, SaveSettings};

/// Draw with the default thread-local RNG.
pub fn draw(settings: &DrawSettings) -> Result<DrawOutput> {
    let mut source = ThreadRngSource::new();
    draw_with(&mut source, settings)
}

/// Draw against a caller-chosen source (seeded runs, tests).
pub fn draw_with(source: &mut dyn RandomSource, settings: &DrawSettings) -> Result<DrawOutput> {
    DrawNumbers::new(source).run(settings)
}

/// Load settings from `path`, with defaults for anything missing.
pub fn load_settings(path: &Path) -> Result<DrawSettings> {
    let store = TomlSettingsStore::new(path);
    LoadSettings::new(&store).run()
}

/// Persist `settings` to `path`.
pub fn save_settings(path: &Path, settings: &DrawSettings) -> Result<()> {
    let store = TomlSettingsStore::new(path);
    SaveSettings::new(&store).run(settings)
}

/// Append a finished draw to the history log at `path`.
pub fn append_history(path: &Path, record: &DrawRecord) -> InfraResult<()> {
    let sink = FileHistorySink::new(path);
    RecordDraw::new(&sink).run(record)
}

/// Stamp a finished draw as a history record.
pub fn record_now(settings: &DrawSettings, values: Vec<i64>) -> DrawRecord {
    DrawRecord::new(Local::now(), settings.clone(), values)
}
