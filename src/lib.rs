//! nifty-pe: data resolution and aggregation core for Nifty 50 P/E tracking.
//!
//! The crate turns heterogeneous NSE quote payloads into chart-ready data in
//! three stages:
//! - [`resolve`] extracts a canonical price/earnings value from one untyped
//!   upstream record, walking a fixed precedence table of candidate paths.
//! - [`batch`] orchestrates paced, strictly sequential per-symbol fetches
//!   with independent per-item failure handling.
//! - [`pivot`] merges per-symbol histories into a date-aligned wide table
//!   with one column per symbol.
//!
//! [`NseClient`] is the production fetch collaborator; anything that can
//! produce an [`EquityRecord`] can stand in for it through the
//! [`EquityFetcher`] trait.

pub mod batch;
pub mod core;
pub mod equity;
pub mod pivot;
pub mod resolve;
pub mod universe;

pub use crate::core::{NseClient, NseClientBuilder, PeError};
pub use crate::core::models::{
    BatchItem, BatchResponse, EquityRecord, MetricResult, PePoint, PivotRow,
};
pub use crate::core::services::{EquityFetcher, Pacer, PeHistorySource, TokioPacer};
pub use crate::batch::PeBatch;
pub use crate::equity::Equity;
pub use crate::pivot::PivotTable;
