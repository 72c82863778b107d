use serde::{Deserialize, Serialize};

/// Employee as exchanged with API clients.
///
/// `id` is `0` until storage assigns one; request bodies may omit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    #[serde(default)]
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl EmployeeDto {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: 0, firstname: firstname.into(), lastname: lastname.into(), email: email.into() }
    }
}
