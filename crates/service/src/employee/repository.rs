use async_trait::async_trait;
use models::employee;

use crate::errors::ServiceError;

/// Storage abstraction the employee service is written against.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert when `record.id` is 0 (id assigned by storage), otherwise overwrite.
    async fn save(&self, record: employee::Model) -> Result<employee::Model, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<employee::Model>, ServiceError>;
    /// All records in ascending id order.
    async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError>;
    async fn delete(&self, record: employee::Model) -> Result<(), ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Rows {
        by_id: BTreeMap<i32, employee::Model>,
        last_id: i32,
    }

    #[derive(Default)]
    pub struct InMemoryEmployeeRepository {
        rows: Mutex<Rows>,
    }

    impl InMemoryEmployeeRepository {
        pub async fn len(&self) -> usize {
            self.rows.lock().await.by_id.len()
        }
    }

    #[async_trait]
    impl EmployeeRepository for InMemoryEmployeeRepository {
        async fn save(&self, mut record: employee::Model) -> Result<employee::Model, ServiceError> {
            let mut rows = self.rows.lock().await;
            if record.is_new() {
                rows.last_id += 1;
                record.id = rows.last_id;
            } else {
                rows.last_id = rows.last_id.max(record.id);
            }
            rows.by_id.insert(record.id, record.clone());
            Ok(record)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> {
            Ok(self.rows.lock().await.by_id.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError> {
            Ok(self.rows.lock().await.by_id.values().cloned().collect())
        }

        async fn delete(&self, record: employee::Model) -> Result<(), ServiceError> {
            self.rows.lock().await.by_id.remove(&record.id);
            Ok(())
        }
    }
}
