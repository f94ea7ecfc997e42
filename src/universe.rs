//! The fixed tracked universe.

/// Nifty 50 constituents tracked by the hosting service.
///
/// The index is reconstituted twice a year; this list is updated by hand
/// when that happens rather than discovered at runtime.
pub const NIFTY_50: [&str; 50] = [
    "RELIANCE",
    "TCS",
    "HDFCBANK",
    "INFY",
    "HINDUNILVR",
    "ICICIBANK",
    "BHARTIARTL",
    "SBIN",
    "BAJFINANCE",
    "LICI",
    "ITC",
    "SUNPHARMA",
    "AXISBANK",
    "KOTAKBANK",
    "LT",
    "HCLTECH",
    "ASIANPAINT",
    "MARUTI",
    "ULTRACEMCO",
    "TITAN",
    "NTPC",
    "NESTLEIND",
    "WIPRO",
    "ONGC",
    "POWERGRID",
    "M&M",
    "TATAMOTORS",
    "ADANIENT",
    "JSWSTEEL",
    "ADANIPORTS",
    "TATASTEEL",
    "HDFCLIFE",
    "BAJAJFINSV",
    "COALINDIA",
    "DIVISLAB",
    "TECHM",
    "GRASIM",
    "HINDALCO",
    "CIPLA",
    "SBILIFE",
    "BRITANNIA",
    "EICHERMOT",
    "APOLLOHOSP",
    "DRREDDY",
    "BPCL",
    "HEROMOTOCO",
    "INDUSINDBK",
    "VEDL",
    "GODREJCP",
    "DABUR",
];
