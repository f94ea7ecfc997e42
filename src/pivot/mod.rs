//! Date-major pivot of per-symbol P/E series.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::core::{PeError, PeHistorySource, PePoint, PivotRow};

/// Pivot per-symbol series into chart-ready rows without any filtering.
#[must_use]
pub fn rows(series: &[(String, Vec<PePoint>)]) -> Vec<PivotRow> {
    PivotTable::new().rows(series)
}

/// A builder that pivots per-symbol time series into one date-major table,
/// optionally restricted to a symbol set and an inclusive date window.
#[derive(Debug, Clone, Default)]
pub struct PivotTable {
    symbols: Option<Vec<String>>,
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
}

impl PivotTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the pivot to the given symbols (matched case-insensitively).
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = Some(syms.into_iter().map(|s| s.into().to_uppercase()).collect());
        self
    }

    /// Keep only points on or after `date`.
    #[must_use]
    pub const fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    /// Keep only points on or before `date`.
    #[must_use]
    pub const fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    /// Merge the series into rows sorted ascending by calendar date.
    ///
    /// Each row carries the date plus one entry per symbol that has a value
    /// on that date; symbols without a value are omitted from the row rather
    /// than null-filled. Input point order does not matter; rows come out
    /// of the date-keyed map already sorted, with no duplicate dates. When a
    /// symbol has two points on the same date, the later one in the input
    /// wins.
    #[must_use]
    pub fn rows(&self, series: &[(String, Vec<PePoint>)]) -> Vec<PivotRow> {
        let mut by_date: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();

        for (symbol, points) in series {
            let symbol = symbol.to_uppercase();
            if let Some(keep) = &self.symbols
                && !keep.contains(&symbol)
            {
                continue;
            }
            for p in points {
                if self.since.is_some_and(|d| p.date < d) || self.until.is_some_and(|d| p.date > d)
                {
                    continue;
                }
                by_date
                    .entry(p.date)
                    .or_default()
                    .insert(symbol.clone(), p.pe_ratio);
            }
        }

        by_date
            .into_iter()
            .map(|(date, values)| PivotRow { date, values })
            .collect()
    }

    /// Pull every tracked series from the history collaborator and pivot it.
    ///
    /// The lower bound is pushed down to the source so persistence can skip
    /// old points; the symbol filter and upper bound apply during the pivot.
    ///
    /// # Errors
    ///
    /// Propagates whatever the history collaborator fails with.
    pub fn rows_from<S: PeHistorySource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Vec<PivotRow>, PeError> {
        let series = source.series(self.since)?;
        Ok(self.rows(&series))
    }
}
