//! Core components of the `tradier-rs` backend.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`Tradier`] client and its builder.
//! - The primary [`TdError`] type.
//! - Shared data models like [`Quote`] and [`Granule`].
//! - The cancellable [`AsyncOperation`] handle and the HTTP transport behind it.

/// The Tradier client (`Tradier`), builder, and endpoint defaults.
pub mod client;
/// Configuration tree consumed by `Backend::set_config`.
pub mod config;
/// The primary error type (`TdError`) for the crate.
pub mod error;
/// Shared data models (`Quote`, `Granule`, `Ticker`, ...).
pub mod models;
/// Operation handles and completion callbacks.
pub mod operation;
/// Query window computation for price history.
pub mod window;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::Tradier`
pub use client::{Tradier, TradierBuilder};
pub use config::ConfigNode;
pub use error::TdError;
pub use models::{Exchange, Granularity, Granule, MISSING_PRICE, Quote, Status, Ticker};
pub use operation::{AsyncOperation, Callback, callback};
