//! The market data capability interface.
//!
//! A backend is one data provider. Every operation returns an [`AsyncOperation`] right away
//! and reports its outcome exactly once through the callback, on whatever thread the
//! transport completes on. A missing callback, or a request the provider cannot serve at
//! all, is a programmer error: it is returned as `Err` before any request is issued.

use chrono::{DateTime, Utc};

use crate::core::config::ConfigNode;
use crate::core::models::{Exchange, Granularity, Granule, Quote, Ticker};
use crate::core::operation::{AsyncOperation, Callback};
use crate::core::TdError;

/// Market data capabilities implemented once per provider.
pub trait Backend: Send + Sync {
    /// Short provider identifier, used in logs.
    fn id(&self) -> &'static str;

    /// Reads provider settings (the access token) from a config forest.
    ///
    /// Must happen before operations are started; nodes that are absent leave the current
    /// setting untouched.
    fn set_config(&mut self, config: &[ConfigNode]);

    /// Lists the exchanges tickers can be reported on.
    ///
    /// # Errors
    ///
    /// Returns `TdError::MissingCallback` if `callback` is `None`.
    fn get_exchanges(
        &self,
        callback: Option<Callback<Vec<Exchange>>>,
    ) -> Result<AsyncOperation, TdError>;

    /// Searches tickers by symbol or company name.
    ///
    /// # Errors
    ///
    /// Returns `TdError::MissingCallback` if `callback` is `None`, or `TdError::NoRuntime`
    /// if there is no runtime to run the request on.
    fn find_ticker(
        &self,
        query: &str,
        callback: Option<Callback<Vec<Ticker>>>,
    ) -> Result<AsyncOperation, TdError>;

    /// Fetches the current quote for one symbol.
    ///
    /// # Errors
    ///
    /// Same as [`Backend::find_ticker`].
    fn get_quote(
        &self,
        symbol: &str,
        callback: Option<Callback<Quote>>,
    ) -> Result<AsyncOperation, TdError>;

    /// Fetches intraday price history for one symbol, ending at `to`.
    ///
    /// # Errors
    ///
    /// Same as [`Backend::find_ticker`], plus `TdError::UnsupportedGranularity` for
    /// granularities the provider cannot serve.
    fn get_prices(
        &self,
        symbol: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        granularity: Granularity,
        callback: Option<Callback<Vec<Granule>>>,
    ) -> Result<AsyncOperation, TdError>;
}
