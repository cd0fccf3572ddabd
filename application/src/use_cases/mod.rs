//! Use cases (application services)

pub mod suggest_domains;
pub mod suggest_with_tools;
