use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use chrono::NaiveDate;

use crate::core::{EquityRecord, PeError, PePoint};

/// A trait for collaborators that can fetch one upstream equity record.
///
/// This is the seam the batch orchestrator is written against: the
/// production implementation is [`NseClient`](crate::core::NseClient), and
/// tests substitute canned records or failures without touching a network.
pub trait EquityFetcher: Send + Sync {
    /// Asynchronously fetches the raw equity record for `symbol`.
    ///
    /// Transport errors, non-success statuses, and unparseable bodies all
    /// surface as `PeError`; what the record *contains* is not this trait's
    /// concern.
    fn fetch_equity<'a>(
        &'a self,
        symbol: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<EquityRecord, PeError>> + Send + 'a>>;
}

/// A trait for the pacing pause between batch items.
///
/// Production wiring uses [`TokioPacer`]; tests inject a recording no-op so
/// a full batch runs with zero real delay.
pub trait Pacer: Send + Sync {
    fn pause<'a>(&'a self, wait: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

/// Pacer backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

impl Pacer for TokioPacer {
    fn pause<'a>(&'a self, wait: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(tokio::time::sleep(wait))
    }
}

/// A trait for the persistence collaborator that supplies per-symbol P/E
/// history.
///
/// The core only ever asks for every tracked series, whole or from a date
/// onward; any narrower windowing happens inside the pivot. Point order
/// within a series is not assumed.
pub trait PeHistorySource {
    fn series(
        &self,
        since: Option<NaiveDate>,
    ) -> Result<Vec<(String, Vec<PePoint>)>, PeError>;
}
