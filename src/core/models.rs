use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One upstream equity snapshot, as served by the NSE quote-equity API.
///
/// The payload has no contractual schema: fields of interest may be absent,
/// null, zeroed, serialized as strings, or moved between nesting levels over
/// time, so it is kept as an untyped JSON tree and interrogated by the
/// resolver instead of being deserialized into a fixed struct.
pub type EquityRecord = serde_json::Value;

/* ----- SINGLE-SYMBOL RESOLUTION (shared by equity/ and resolve/) ----- */

/// Outcome of resolving one symbol's P/E ratio from a fetched record.
///
/// `pe_ratio` is `Some` only when `success` is true; a ratio of zero or
/// below is treated as absent upstream data, not a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub symbol: String,
    pub pe_ratio: Option<f64>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/* ----- BATCH (shared by batch/ and the hosting layer) ----- */

/// One symbol's fetch-and-resolve outcome within a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItem {
    pub symbol: String,
    pub pe_ratio: Option<f64>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Envelope for a whole batch run.
///
/// `success` reports the run itself, which always completes; per-symbol
/// failures live on the individual items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
    pub success: bool,
}

impl From<Vec<BatchItem>> for BatchResponse {
    fn from(results: Vec<BatchItem>) -> Self {
        Self {
            results,
            success: true,
        }
    }
}

/* ----- TIME SERIES (shared by pivot/ and the history collaborator) ----- */

/// One P/E observation for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PePoint {
    pub date: NaiveDate,
    pub pe_ratio: f64,
}

/// One date-major row of the pivoted table.
///
/// Serializes flat, as `{"date": "...", "<SYMBOL>": <value>, ...}` with one
/// key per symbol that has a value on that date; symbols without a value are
/// omitted rather than null-filled, so the chart renderer sees a gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotRow {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}
