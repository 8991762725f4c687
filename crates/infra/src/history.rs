// crates/infra/src/history.rs
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use draw_numbers_domain::format;
use draw_numbers_ports::history::{HistoryEntry, HistorySink};
use draw_numbers_shared_kernel::{InfraResult, InfrastructureError};

const SEPARATOR_WIDTH: usize = 50;

/// Append-only plain-text history log, one block per draw.
pub struct FileHistorySink {
    path: PathBuf,
}

impl FileHistorySink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // The handle lives only inside this scope, so it is closed on every
    // exit path, including write failures.
    fn write_entry(&self, entry: &HistoryEntry) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(out, "生成时间: {}", entry.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(out, "范围: {} - {}", entry.min, entry.max)?;
        writeln!(out, "数量: {}", entry.count)?;
        writeln!(out, "生成的随机数:")?;
        writeln!(out, "{}", format::wrapped_values(&entry.values))?;
        writeln!(out)?;
        out.flush()
    }
}

impl HistorySink for FileHistorySink {
    fn append(&self, entry: &HistoryEntry) -> InfraResult<()> {
        self.write_entry(entry)
            .map_err(|err| InfrastructureError::HistoryAppend {
                path: self.path.clone(),
                source: err,
            })
    }
}
