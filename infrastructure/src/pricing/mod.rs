//! Price service adapters

pub mod http;

pub use http::{DEFAULT_CURRENCY, HttpPriceStreamProvider};
