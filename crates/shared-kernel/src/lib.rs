// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, DrawNumbersError, ErrorContext, InfraResult, InfrastructureError,
    Result,
};

pub mod error;
