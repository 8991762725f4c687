//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`random`]: Uniform random integer draws
//! - [`settings`]: Settings persistence
//! - [`history`]: The append-only draw history
//!
//! These ports keep the domain and application layers independent of any
//! concrete RNG or filesystem implementation.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod history;
pub mod random;
pub mod settings;
