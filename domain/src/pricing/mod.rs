//! Pricing domain
//!
//! Raw upstream price records and the normalized [`entities::PriceQuote`]
//! derived from them. Tier selection prefers a named entry and otherwise
//! takes the first non-null entry in key order.

pub mod entities;
