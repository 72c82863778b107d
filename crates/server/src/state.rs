use std::sync::Arc;

use service::employee::{repository::EmployeeRepository, EmployeeService};

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<EmployeeService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees: Arc::new(EmployeeService::new(repo)) }
    }
}
