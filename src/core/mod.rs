//! Core components of the `nifty-pe` crate.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`NseClient`] and its builder.
//! - The primary [`PeError`] type.
//! - Shared data models like [`MetricResult`] and [`PivotRow`].
//! - The collaborator traits the orchestration layers are written against.

/// The main client (`NseClient`), builder, and default endpoints.
pub mod client;
/// The primary error type (`PeError`) for the crate.
pub mod error;
/// Shared data models used across multiple modules.
pub mod models;
/// Collaborator traits for fetching, pacing, and history supply.
pub mod services;

// convenient re-exports so most code can just `use crate::core::NseClient`
pub use client::{NseClient, NseClientBuilder};
pub use error::PeError;
pub use models::{BatchItem, BatchResponse, EquityRecord, MetricResult, PePoint, PivotRow};
pub use services::{EquityFetcher, Pacer, PeHistorySource, TokioPacer};
