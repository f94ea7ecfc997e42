//! Public client surface + builder.
//! Internals are split into `auth` (session warm-up) and `constants`
//! (UA + default endpoints).

mod auth;
mod constants;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use constants::{DEFAULT_BASE_QUOTE, DEFAULT_REFERER_BASE, DEFAULT_WARMUP_URL, USER_AGENT};
use reqwest::Client;
use tokio::sync::{Mutex, RwLock};
use url::Url;

use crate::core::services::EquityFetcher;
use crate::core::{EquityRecord, PeError};

/// Client for the NSE quote-equity API.
///
/// Cheap to clone; clones share the underlying connection pool, cookie jar,
/// and warm-up state.
#[derive(Debug, Clone)]
pub struct NseClient {
    http: Client,
    base_quote: Url,
    warmup_url: Url,
    referer_base: Url,

    warmed: Arc<RwLock<bool>>,
    warmup_lock: Arc<Mutex<()>>,
}

impl Default for NseClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NseClient {
    /// Create a new builder.
    pub fn builder() -> NseClientBuilder {
        NseClientBuilder::default()
    }

    /// Fetch the raw quote-equity record for one symbol.
    ///
    /// The symbol is uppercased before it goes on the wire. A non-success
    /// status maps to [`PeError::Status`]; a body that is not JSON (the API
    /// serves an HTML block page when it dislikes a session) maps to
    /// [`PeError::Data`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch_equity(&self, symbol: &str) -> Result<EquityRecord, PeError> {
        self.ensure_session().await?;

        let symbol = symbol.trim().to_uppercase();

        let mut url = self.base_quote.clone();
        url.query_pairs_mut().append_pair("symbol", &symbol);

        let mut referer = self.referer_base.clone();
        referer.query_pairs_mut().append_pair("symbol", &symbol);

        let resp = self
            .http
            .get(url.clone())
            .header("accept", "application/json")
            .header("referer", referer.as_str())
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status >= 400 {
            return Err(PeError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            if std::env::var("NSE_DEBUG").ok().as_deref() == Some("1") {
                eprintln!(
                    "NSE_DEBUG: unparseable quote-equity body for {symbol} ({} bytes)",
                    body.len()
                );
            }
            PeError::Data(format!("quote-equity json parse: {e}"))
        })
    }
}

impl EquityFetcher for NseClient {
    fn fetch_equity<'a>(
        &'a self,
        symbol: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<EquityRecord, PeError>> + Send + 'a>> {
        Box::pin(NseClient::fetch_equity(self, symbol))
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NseClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    warmup_url: Option<Url>,
    referer_base: Option<Url>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NseClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quote-equity API base (useful for tests).
    #[must_use]
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Override the session warm-up URL (useful for tests).
    #[must_use]
    pub fn warmup_url(mut self, url: Url) -> Self {
        self.warmup_url = Some(url);
        self
    }

    /// Override the referer base sent with quote requests.
    #[must_use]
    pub fn referer_base(mut self, url: Url) -> Self {
        self.referer_base = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default endpoint fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<NseClient, PeError> {
        let base_quote = self.base_quote.unwrap_or(Url::parse(DEFAULT_BASE_QUOTE)?);
        let warmup_url = self.warmup_url.unwrap_or(Url::parse(DEFAULT_WARMUP_URL)?);
        let referer_base = self
            .referer_base
            .unwrap_or(Url::parse(DEFAULT_REFERER_BASE)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NseClient {
            http,
            base_quote,
            warmup_url,
            referer_base,
            warmed: Arc::new(RwLock::new(false)),
            warmup_lock: Arc::new(Mutex::new(())),
        })
    }
}
