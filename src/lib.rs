//! tradier-rs: callback-driven market data backend for the Tradier API.
//!
//! Every fetch returns an [`AsyncOperation`] immediately and delivers
//! `(Status, AsyncOperation, result)` once to its callback when the request completes.
//! The [`fetch`] module wraps the same operations as `async` functions.
//!
//! ```no_run
//! use tradier_rs::{Backend, ConfigNode, Quote, Status, Tradier, callback};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), tradier_rs::TdError> {
//! let mut backend = Tradier::builder().build()?;
//! backend.set_config(&[ConfigNode::entry("access_token", "<token>")]);
//!
//! let op = backend.get_quote(
//!     "AAPL",
//!     callback(|status, _op, quote: Quote| {
//!         if status == Status::Ok {
//!             println!("AAPL last = {}", quote.last);
//!         }
//!     }),
//! )?;
//! # let _ = op;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod core;
pub mod fetch;
pub mod tradier;

pub use backend::Backend;
pub use crate::core::{
    AsyncOperation, Callback, ConfigNode, Exchange, Granularity, Granule, MISSING_PRICE, Quote,
    Status, TdError, Ticker, Tradier, TradierBuilder, callback,
};
pub use crate::core::window::{MAX_GRANULES, start_time};
pub use tradier::{EXCHANGES, exchange_by_id};
