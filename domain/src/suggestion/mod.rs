//! Suggestion domain: requests, results and answer extraction

pub mod context;
pub mod entities;
pub mod evidence;
pub mod parsing;
