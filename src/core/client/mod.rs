//! Public client surface + builder.
//! Endpoint defaults live in `constants`.

mod constants;

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use tokio::runtime::Handle;
use url::Url;

use crate::core::TdError;
use crate::core::config::{self, ConfigNode};
pub(crate) use constants::{PATH_QUOTES, PATH_SEARCH, PATH_TIMESALES};
use constants::{DEFAULT_BASE_URL, USER_AGENT};

/// Market data backend for the Tradier brokerage API.
///
/// Holds the HTTP client, the endpoint base and the access token. Configure it (builder or
/// [`Backend::set_config`](crate::Backend::set_config)) before starting operations; the
/// token is copied into each request when it is built.
#[derive(Debug, Clone)]
pub struct Tradier {
    http: Client,
    base: Url,
    access_token: String,
    runtime: Option<Handle>,
}

impl Default for Tradier {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl Tradier {
    /// Create a new builder.
    pub fn builder() -> TradierBuilder {
        TradierBuilder::default()
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Runtime that in-flight requests are spawned on: the configured one, else the current.
    pub(crate) fn runtime(&self) -> Result<Handle, TdError> {
        match &self.runtime {
            Some(h) => Ok(h.clone()),
            None => Handle::try_current().map_err(|_| TdError::NoRuntime),
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, TdError> {
        Ok(self.base.join(path)?)
    }

    pub(crate) fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", self.access_token);
        match HeaderValue::from_str(&bearer) {
            Ok(v) => {
                headers.insert(AUTHORIZATION, v);
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("access token is not a valid header value; sending no Authorization");
            }
        }
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    pub(crate) fn apply_config(&mut self, forest: &[ConfigNode]) {
        if let Some(token) = config::lookup(forest, "access_token") {
            self.access_token = token.to_string();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            token_set = !self.access_token.is_empty(),
            "tradier config applied"
        );
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct TradierBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    access_token: Option<String>,
    runtime: Option<Handle>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl TradierBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the REST base (e.g., `https://api.tradier.com/v1/` for production).
    ///
    /// Endpoint paths are joined relative to it, so keep the trailing slash.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the access token up front instead of through a config tree.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Spawn requests on this runtime instead of the one current at call time.
    pub fn runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<Tradier, TdError> {
        let base = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(Tradier {
            http,
            base,
            access_token: self.access_token.unwrap_or_default(),
            runtime: self.runtime,
        })
    }
}
