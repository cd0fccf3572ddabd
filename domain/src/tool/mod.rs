//! Tool domain module
//!
//! A tool is a named unit of work the model may ask for during a run. Every
//! tool is described by a [`ToolDefinition`] (advertised to the model),
//! invoked through a [`ToolInvocation`] and answered with a [`ToolResult`].
//!
//! ```text
//! ┌────────────────┐    ┌────────────────┐    ┌──────────────┐
//! │ ToolDefinition │───▶│ ToolInvocation │───▶│ ToolResult   │
//! │ (advertised)   │    │ (from model)   │    │ (tool turn)  │
//! └────────────────┘    └────────────────┘    └──────────────┘
//! ```
//!
//! Execution itself lives behind ports in the application layer.

pub mod entities;
pub mod value_objects;

pub use entities::{ToolDefinition, ToolInvocation, ToolParameter};
pub use value_objects::{ToolError, ToolErrorKind, ToolResult};
