use async_trait::async_trait;
use models::employee;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, EntityTrait, NotSet,
    QueryOrder, Set,
};

use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn save(&self, record: employee::Model) -> Result<employee::Model, ServiceError> {
        if record.is_new() {
            let am = employee::ActiveModel {
                id: NotSet,
                firstname: Set(record.firstname),
                lastname: Set(record.lastname),
                email: Set(record.email),
            };
            return Ok(am.insert(&self.db).await?);
        }
        let am = employee::ActiveModel {
            id: Unchanged(record.id),
            firstname: Set(record.firstname),
            lastname: Set(record.lastname),
            email: Set(record.email),
        };
        Ok(am.update(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError> {
        Ok(employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn delete(&self, record: employee::Model) -> Result<(), ServiceError> {
        employee::Entity::delete_by_id(record.id).exec(&self.db).await?;
        Ok(())
    }
}
