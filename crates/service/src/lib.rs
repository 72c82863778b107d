//! Service layer providing employee CRUD on top of `models`.
//! - Separates business logic from data access through [`employee::repository::EmployeeRepository`].
//! - Maps between the persisted record and the wire DTO.

pub mod errors;
pub mod employee;
#[cfg(test)]
pub mod test_support;
