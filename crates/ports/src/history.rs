// crates/ports/src/history.rs
use chrono::{DateTime, Local};
use draw_numbers_shared_kernel::InfraResult;

/// One appendable history entry, reduced to the fields the log records.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    pub min: i64,
    pub max: i64,
    pub count: u32,
    pub values: Vec<i64>,
}

/// Append-only sink for draw history. Implementations never truncate or
/// rewrite prior entries.
pub trait HistorySink {
    fn append(&self, entry: &HistoryEntry) -> InfraResult<()>;
}
