//! Core components of the `metocean-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`MetOceanClient`] and its builder.
//! - The primary [`MetOceanError`] type.
//! - Shared data models used by every endpoint family.
//! - Internal networking, validation, and timestamp conversion logic.

/// The main client (`MetOceanClient`), builder, and per-call options.
pub mod client;
/// The primary error type (`MetOceanError`) for the crate.
pub mod error;
/// Shared data models (`Point`, `TimeRange`, `VariableData`, ...).
pub mod models;

pub(crate) mod conversions;
pub(crate) mod net;
pub(crate) mod validate;

// convenient re-exports so most code can just `use crate::core::MetOceanClient`
pub use client::{MetOceanClient, MetOceanClientBuilder, RequestOptions};
pub use error::MetOceanError;
