//! [`Backend`] implementation for Tradier.

mod exchanges;
pub mod parse;

use chrono::{DateTime, Utc};
use serde_json::Value;
use url::Url;

use crate::backend::Backend;
use crate::core::client::{PATH_QUOTES, PATH_SEARCH, PATH_TIMESALES};
use crate::core::config::ConfigNode;
use crate::core::models::{Exchange, Granularity, Granule, Quote, Status, Ticker};
use crate::core::net::{Call, HttpResponse, TransportStatus};
use crate::core::operation::{AsyncOperation, Callback};
use crate::core::window;
use crate::core::TdError;
use crate::Tradier;

pub use exchanges::{EXCHANGES, exchange_by_id};

impl Backend for Tradier {
    fn id(&self) -> &'static str {
        "tradier"
    }

    fn set_config(&mut self, config: &[ConfigNode]) {
        self.apply_config(config);
    }

    fn get_exchanges(
        &self,
        callback: Option<Callback<Vec<Exchange>>>,
    ) -> Result<AsyncOperation, TdError> {
        let callback = callback.ok_or(TdError::MissingCallback {
            operation: "get_exchanges",
        })?;

        let op = AsyncOperation::finished();
        callback(Status::Ok, op.clone(), EXCHANGES.to_vec());
        Ok(op)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, callback), err))]
    fn find_ticker(
        &self,
        query: &str,
        callback: Option<Callback<Vec<Ticker>>>,
    ) -> Result<AsyncOperation, TdError> {
        let callback = callback.ok_or(TdError::MissingCallback {
            operation: "find_ticker",
        })?;

        let mut url = self.endpoint(PATH_SEARCH)?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("indexes", "false");

        self.dispatch("find_ticker", url, callback, |json| {
            Ok(parse::parse_ticker_list(json))
        })
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, callback), err))]
    fn get_quote(
        &self,
        symbol: &str,
        callback: Option<Callback<Quote>>,
    ) -> Result<AsyncOperation, TdError> {
        let callback = callback.ok_or(TdError::MissingCallback {
            operation: "get_quote",
        })?;

        let mut url = self.endpoint(PATH_QUOTES)?;
        url.query_pairs_mut()
            .append_pair("symbols", symbol)
            .append_pair("greeks", "false");

        self.dispatch("get_quote", url, callback, parse::parse_quote)
    }

    /// The window start is always derived from `to` and `granularity`; `from` is accepted
    /// for interface compatibility but does not bound the request.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, callback), err))]
    fn get_prices(
        &self,
        symbol: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        granularity: Granularity,
        callback: Option<Callback<Vec<Granule>>>,
    ) -> Result<AsyncOperation, TdError> {
        let callback = callback.ok_or(TdError::MissingCallback {
            operation: "get_prices",
        })?;

        let interval = granularity
            .interval()
            .ok_or(TdError::UnsupportedGranularity(granularity))?;

        // TODO: bound the window by `from` too; today the lookback is fixed per granularity.
        let _ = from;
        let start = window::format_query_time(window::start_time(to, granularity));
        let end = window::format_query_time(to);

        #[cfg(feature = "tracing")]
        tracing::debug!(interval, %start, %end, "time & sales window");

        let mut url = self.endpoint(PATH_TIMESALES)?;
        url.query_pairs_mut()
            .append_pair("symbol", symbol)
            .append_pair("session_filter", "open")
            .append_pair("interval", interval)
            .append_pair("start", &start)
            .append_pair("end", &end);

        self.dispatch("get_prices", url, callback, parse::parse_prices)
    }
}

impl Tradier {
    /// Starts `url` on the transport and routes the outcome through `parse` to `callback`.
    fn dispatch<T, P>(
        &self,
        operation: &'static str,
        url: Url,
        callback: Callback<T>,
        parse: P,
    ) -> Result<AsyncOperation, TdError>
    where
        T: Default + Send + 'static,
        P: FnOnce(&Value) -> Result<T, TdError> + Send + 'static,
    {
        let runtime = self.runtime()?;
        let call = Call::new(self.http(), url, self.auth_headers());
        let op = AsyncOperation::new(call.request());

        let handle = op.clone();
        call.start(&runtime, move |transport, resp| {
            let (status, result) = complete(operation, transport, &resp, parse);
            callback(status, handle, result);
        });

        Ok(op)
    }
}

/// Maps a finished call onto the callback arguments. The parser only sees `200 OK` bodies.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn complete<T, P>(
    operation: &'static str,
    transport: TransportStatus,
    resp: &HttpResponse,
    parse: P,
) -> (Status, T)
where
    T: Default,
    P: FnOnce(&Value) -> Result<T, TdError>,
{
    if transport != TransportStatus::Ok || resp.status != 200 {
        #[cfg(feature = "tracing")]
        tracing::warn!(operation, ?transport, status = resp.status, "request failed");
        return (Status::Failure, T::default());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(operation, body = %String::from_utf8_lossy(&resp.body), "response");

    let parsed = serde_json::from_slice::<Value>(&resp.body)
        .map_err(TdError::from)
        .and_then(|json| parse(&json));

    match parsed {
        Ok(v) => (Status::Ok, v),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(operation, error = %_e, "parsing response failed");
            (Status::Failure, T::default())
        }
    }
}
