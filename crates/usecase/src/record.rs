// crates/usecase/src/record.rs
use draw_numbers_domain::DrawRecord;
use draw_numbers_ports::history::{HistoryEntry, HistorySink};
use draw_numbers_shared_kernel::InfraResult;

/// Appends a finished draw to the history log.
///
/// Failures here are soft: the draw already succeeded, so callers surface
/// them as warnings instead of propagating a hard failure.
pub struct RecordDraw<'a> {
    sink: &'a dyn HistorySink,
}

impl<'a> RecordDraw<'a> {
    pub fn new(sink: &'a dyn HistorySink) -> Self {
        Self { sink }
    }

    pub fn run(&self, record: &DrawRecord) -> InfraResult<()> {
        self.sink.append(&record_to_entry(record))
    }
}

fn record_to_entry(record: &DrawRecord) -> HistoryEntry {
    HistoryEntry {
        timestamp: record.timestamp,
        min: record.settings.min,
        max: record.settings.max,
        count: record.settings.count,
        values: record.values.clone(),
    }
}
