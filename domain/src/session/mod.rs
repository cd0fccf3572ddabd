//! Conversation domain.
//!
//! - [`entities::MessageHistory`]: append-only turn log owned by one run
//! - [`entities::ChatMessage`]: a single role-tagged turn
//! - [`response::ModelReply`]: ranked choices returned by the model

pub mod entities;
pub mod response;
