//! SeaORM entities and connection helpers for the employee store.

pub mod db;
pub mod employee;
pub mod errors;

#[cfg(test)]
mod tests;
