//! Single-symbol snapshot surface.

use crate::core::{EquityRecord, MetricResult, NseClient, PeError};
use crate::resolve;

/// A single tracked equity, bound to a client.
///
/// Thin convenience over [`NseClient::fetch_equity`] plus resolution,
/// shaped for the hosting layer's single-symbol endpoint.
#[derive(Debug, Clone)]
pub struct Equity {
    client: NseClient,
    symbol: String,
}

impl Equity {
    #[must_use]
    pub fn new(client: &NseClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// The symbol this handle is bound to, as given.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetch the symbol's current record and resolve its P/E ratio.
    ///
    /// Fetch failures propagate to the caller, since with a single item there
    /// is no batch to protect. A resolution miss is not an error and comes
    /// back as an unsuccessful [`MetricResult`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn pe(&self) -> Result<MetricResult, PeError> {
        let record = self.client.fetch_equity(&self.symbol).await?;
        Ok(resolve::metric_result(&self.symbol, &record))
    }

    /// Fetch the full untyped record for this symbol.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn details(&self) -> Result<EquityRecord, PeError> {
        self.client.fetch_equity(&self.symbol).await
    }
}
