//! Capability tools offered to the model
//!
//! - `price_checker_tool`: registration price from the streaming price service
//! - `availability_checker_tool`: registry lookup

pub mod availability;
pub mod price;

mod registry;

pub use availability::{AVAILABILITY_CHECKER, AvailabilityCheckerTool, DEFAULT_LOOKUP_BASE};
pub use price::{PRICE_CHECKER, PriceCheckerTool, first_price};
pub use registry::ToolRegistry;
