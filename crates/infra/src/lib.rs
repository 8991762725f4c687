// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod history;
pub mod random;
pub mod settings;

pub use history::FileHistorySink;
pub use random::{SeededSource, ThreadRngSource};
pub use settings::TomlSettingsStore;
