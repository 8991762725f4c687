// crates/domain/src/record.rs
use chrono::{DateTime, Local};

use crate::settings::DrawSettings;

/// Immutable record of one successful draw: the settings snapshot active at
/// generation time plus the values produced, stamped with local time.
///
/// Created once per draw and never mutated; the history log is append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub timestamp: DateTime<Local>,
    pub settings: DrawSettings,
    pub values: Vec<i64>,
}

impl DrawRecord {
    pub fn new(timestamp: DateTime<Local>, settings: DrawSettings, values: Vec<i64>) -> Self {
        Self {
            timestamp,
            settings,
            values,
        }
    }
}
