//! Shared building blocks for the employee service crates.

pub mod types;
pub mod utils;
