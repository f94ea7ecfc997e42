//! Sequential batch fetch+resolve over a list of symbols.

use std::time::Duration;

use crate::core::{BatchItem, BatchResponse, EquityFetcher, Pacer, TokioPacer};
use crate::resolve;

/// Default pause between per-symbol requests; the upstream provider starts
/// serving block pages when quotes are requested back to back.
const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// A builder for fetching and resolving P/E ratios for a list of symbols.
///
/// Symbols are processed strictly one at a time, in input order, with a
/// pacing pause between consecutive items; concurrency would defeat the
/// rate limit the pause exists for. One symbol's failure never aborts the
/// run: it is recorded on that item and the batch moves on.
///
/// The fetch side is any [`EquityFetcher`]; production wiring passes an
/// [`NseClient`](crate::core::NseClient).
pub struct PeBatch<'a, F: EquityFetcher + ?Sized> {
    fetcher: &'a F,
    symbols: Vec<String>,
    delay: Duration,
    pacer: &'a dyn Pacer,
}

impl<'a, F: EquityFetcher + ?Sized> PeBatch<'a, F> {
    /// Creates a new batch against the given fetch collaborator.
    #[must_use]
    pub fn new(fetcher: &'a F) -> Self {
        Self {
            fetcher,
            symbols: Vec::new(),
            delay: DEFAULT_DELAY,
            pacer: &TokioPacer,
        }
    }

    /// Replaces the current list of symbols with a new list.
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single symbol to the batch.
    #[must_use]
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Sets the pause between consecutive symbols. (Default: 500ms)
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Overrides the pacer that performs the inter-item pause, so tests can
    /// run a whole batch with zero real delay.
    #[must_use]
    pub fn pacer(mut self, pacer: &'a dyn Pacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// Fetch and resolve every symbol: one item per input symbol, input
    /// order preserved, symbols uppercased in the output.
    ///
    /// The run itself is infallible: a fetch failure becomes an
    /// unsuccessful item carrying the error message, and a record that
    /// resolves to no P/E becomes an unsuccessful item with no error. No
    /// pause happens after the last symbol.
    pub async fn run(self) -> Vec<BatchItem> {
        let mut results = Vec::with_capacity(self.symbols.len());
        let last = self.symbols.len().saturating_sub(1);

        for (i, sym) in self.symbols.iter().enumerate() {
            let symbol = sym.trim().to_uppercase();
            let item = match self.fetcher.fetch_equity(sym).await {
                Ok(record) => {
                    let pe = resolve::pe_ratio(&record);
                    BatchItem {
                        symbol,
                        pe_ratio: pe,
                        success: pe.is_some(),
                        error: None,
                    }
                }
                Err(e) => BatchItem {
                    symbol,
                    pe_ratio: None,
                    success: false,
                    error: Some(e.to_string()),
                },
            };
            results.push(item);

            if i < last {
                self.pacer.pause(self.delay).await;
            }
        }

        results
    }

    /// Like [`run`](Self::run), wrapped in the envelope the hosting layer
    /// serializes. The envelope always reports success; failures are
    /// visible only on the individual items.
    pub async fn run_response(self) -> BatchResponse {
        BatchResponse::from(self.run().await)
    }
}
