// src/config.rs
use std::path::PathBuf;

use draw_numbers_core::{DrawSettings, Result};

use crate::args::{Args, OutputFormat};

/// Resolved per-run configuration: the effective draw settings plus the
/// run options that never persist.
#[derive(Debug)]
pub struct RunConfig {
    pub settings: DrawSettings,
    pub config_path: PathBuf,
    pub history_path: PathBuf,
    pub write_history: bool,
    pub save_settings: bool,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub show_config: bool,
}

impl RunConfig {
    /// Load the persisted settings and fold the CLI overrides on top.
    pub fn resolve(args: Args) -> Result<Self> {
        let persisted = draw_numbers_core::load_settings(&args.storage.config)?;
        let settings = apply_overrides(persisted, &args);

        Ok(Self {
            settings,
            config_path: args.storage.config,
            history_path: args.storage.history,
            write_history: !args.storage.no_history,
            save_settings: args.storage.save,
            seed: args.draw.seed,
            format: args.output.format,
            show_config: args.output.show_config,
        })
    }
}

fn apply_overrides(mut settings: DrawSettings, args: &Args) -> DrawSettings {
    if let Some(min) = args.draw.min {
        settings.min = min;
    }
    if let Some(max) = args.draw.max {
        settings.max = max;
    }
    if let Some(count) = args.draw.count {
        settings.count = count;
    }
    if let Some(list) = &args.exclusion.exclude {
        settings.exclusion_enabled = true;
        settings.excluded = DrawSettings::parse_excluded(list);
    }
    if args.exclusion.no_exclusion {
        settings.exclusion_enabled = false;
    }
    settings
}
