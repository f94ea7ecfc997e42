//! P/E resolution from untyped upstream records.
//!
//! Upstream does not keep the ratio at one stable path: depending on the
//! symbol and the day it may appear under `metadata`, `priceInfo`, `info`,
//! or `securityInfo`, be serialized as a number or a string, or be present
//! but zeroed. Resolution walks a fixed precedence table and takes the first
//! usable hit, so the outcome is reproducible regardless of which shape the
//! API happens to serve.

use crate::core::{EquityRecord, MetricResult};

/// Candidate locations for the P/E ratio, highest precedence first.
///
/// `metadata.pdSymbolPe` is the symbol-level ratio; `metadata.pdSectorPe` is
/// the sector-level ratio used when the symbol-level one is absent (loss
/// makers report no symbol P/E). The remaining paths cover older payload
/// shapes.
const PE_PATHS: &[&[&str]] = &[
    &["metadata", "pdSymbolPe"],
    &["metadata", "pdSectorPe"],
    &["priceInfo", "pe"],
    &["info", "pe"],
    &["securityInfo", "pe"],
    &["securityInfo", "priceToEarning"],
];

/// Resolve the P/E ratio from one quote record.
///
/// Returns the first candidate that is present and coerces to a finite value
/// strictly greater than zero; a ratio of zero or below means upstream had
/// no meaningful earnings figure and is treated as absent, not a value. A
/// qualifying candidate short-circuits the walk. Non-object input resolves
/// to `None` rather than erroring.
#[must_use]
pub fn pe_ratio(record: &EquityRecord) -> Option<f64> {
    PE_PATHS.iter().find_map(|path| {
        let node = path.iter().try_fold(record, |node, key| node.get(key))?;
        positive_number(node)
    })
}

/// Assemble the single-symbol resolution payload for `symbol`.
///
/// A resolution miss is data, not an error: `success` is false and `message`
/// carries the reason, in the exact shape the hosting layer serializes.
#[must_use]
pub fn metric_result(symbol: &str, record: &EquityRecord) -> MetricResult {
    let pe = pe_ratio(record);
    MetricResult {
        symbol: symbol.trim().to_uppercase(),
        pe_ratio: pe,
        success: pe.is_some(),
        message: match pe {
            Some(_) => None,
            None => Some("P/E ratio not found in response".to_string()),
        },
    }
}

/// Numeric coercion for one candidate value: JSON numbers pass through,
/// strings parse as decimal (the API serves some numeric fields as text).
fn positive_number(v: &serde_json::Value) -> Option<f64> {
    let n = match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (n.is_finite() && n > 0.0).then_some(n)
}
