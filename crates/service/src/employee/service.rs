use std::sync::Arc;

use models::employee;
use tracing::{info, instrument};

use super::dto::EmployeeDto;
use super::repository::EmployeeRepository;
use crate::errors::ServiceError;

/// Employee CRUD independent of web framework.
///
/// The repository is injected by the caller; the default type parameter lets
/// HTTP state hold any backend behind a trait object.
pub struct EmployeeService<R: EmployeeRepository + ?Sized = dyn EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store a new employee and return it with its assigned id.
    ///
    /// Any id in the input is ignored; storage always assigns a fresh one.
    ///
    /// # Examples
    /// ```
    /// use service::employee::{EmployeeDto, EmployeeService, repository::mock::InMemoryEmployeeRepository};
    /// use std::sync::Arc;
    /// let svc = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::default()));
    /// let created = tokio_test::block_on(svc.create_employee(EmployeeDto::new("Ada", "Lovelace", "ada@example.com"))).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(created.lastname, "Lovelace");
    /// ```
    #[instrument(skip(self, dto))]
    pub async fn create_employee(&self, dto: EmployeeDto) -> Result<EmployeeDto, ServiceError> {
        let record = employee::Model { id: 0, ..employee::Model::from(dto) };
        let saved = self.repo.save(record).await?;
        info!(employee_id = saved.id, "employee_created");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<EmployeeDto, ServiceError> {
        self.load(id).await.map(EmployeeDto::from)
    }

    pub async fn find_all_employee(&self) -> Result<Vec<EmployeeDto>, ServiceError> {
        let records = self.repo.find_all().await?;
        Ok(records.into_iter().map(EmployeeDto::from).collect())
    }

    /// Overwrite name and email of an existing employee; the id never changes.
    #[instrument(skip(self, dto))]
    pub async fn update_employee(&self, id: i32, dto: EmployeeDto) -> Result<EmployeeDto, ServiceError> {
        let mut record = self.load(id).await?;
        record.firstname = dto.firstname;
        record.lastname = dto.lastname;
        record.email = dto.email;
        let saved = self.repo.save(record).await?;
        info!(employee_id = saved.id, "employee_updated");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: i32) -> Result<(), ServiceError> {
        let record = self.load(id).await?;
        self.repo.delete(record).await?;
        info!(employee_id = id, "employee_deleted");
        Ok(())
    }

    async fn load(&self, id: i32) -> Result<employee::Model, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or(ServiceError::NotFound(id))
    }
}
