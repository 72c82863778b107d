use models::employee;

use super::dto::EmployeeDto;

impl From<employee::Model> for EmployeeDto {
    fn from(m: employee::Model) -> Self {
        Self { id: m.id, firstname: m.firstname, lastname: m.lastname, email: m.email }
    }
}

impl From<EmployeeDto> for employee::Model {
    fn from(d: EmployeeDto) -> Self {
        Self { id: d.id, firstname: d.firstname, lastname: d.lastname, email: d.email }
    }
}
