//! Centralized constants for default endpoints and UA.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("tradier-rs/", env!("CARGO_PKG_VERSION"));

/// Tradier REST base; endpoint paths are joined onto it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://sandbox.tradier.com/v1/";

/// Symbol/company search.
pub(crate) const PATH_SEARCH: &str = "markets/search";

/// Real-time quotes.
pub(crate) const PATH_QUOTES: &str = "markets/quotes";

/// Time & sales (intraday history).
pub(crate) const PATH_TIMESALES: &str = "markets/timesales";
