//! # Core
//!
//! Facade crate wiring the infrastructure adapters into the use cases.
//! The CLI consumes this API; nothing here holds state between calls. The
//! caller owns the current settings and the current result set.

// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;

pub use bootstrap::{append_history, draw, draw_with, load_settings, record_now, save_settings};

pub use draw_numbers_domain::{DrawRecord, DrawSettings, format};
pub use draw_numbers_infra::{FileHistorySink, SeededSource, ThreadRngSource, TomlSettingsStore};
pub use draw_numbers_ports::random::RandomSource;
pub use draw_numbers_shared_kernel::{
    DomainError, DrawNumbersError, InfrastructureError, Result,
};
pub use draw_numbers_usecase::DrawOutput;
