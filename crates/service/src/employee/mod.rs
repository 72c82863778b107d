//! Employee module: wire form, mapping, repository seam and the service on top.
//!
//! Requests flow `server` handler -> [`service::EmployeeService`] -> [`repository::EmployeeRepository`].

pub mod dto;
pub mod mapper;
pub mod repo;
pub mod repository;
pub mod service;

pub use dto::EmployeeDto;
pub use service::EmployeeService;
