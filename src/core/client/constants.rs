//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// NSE quote-equity API base (`symbol` is passed as a query parameter).
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://www.nseindia.com/api/quote-equity";

/// Homepage fetched once per session so the cookie jar is populated before
/// the JSON API is hit.
pub(crate) const DEFAULT_WARMUP_URL: &str = "https://www.nseindia.com/";

/// Referer base for quote requests (`symbol` is appended as a query
/// parameter); the API rejects requests that arrive without one.
pub(crate) const DEFAULT_REFERER_BASE: &str = "https://www.nseindia.com/get-quotes/equity";
