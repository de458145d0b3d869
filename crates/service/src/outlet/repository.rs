use async_trait::async_trait;
use models::outlet::{self, Entity as OutletEntity};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::errors::ServiceError;
use crate::outlet::domain::OutletInput;

/// Storage port for outlet rows. Each call is a single statement that commits on its own.
#[async_trait]
pub trait OutletRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<outlet::Model>, ServiceError>;
    async fn create(&self, input: &OutletInput) -> Result<outlet::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<outlet::Model>, ServiceError>;
    /// Lowest id wins when several rows share `code`.
    async fn find_by_code(&self, code: &str) -> Result<Option<outlet::Model>, ServiceError>;
    /// Replace every attribute; `None` when `id` does not exist.
    async fn replace(&self, id: i32, input: &OutletInput) -> Result<Option<outlet::Model>, ServiceError>;
    /// Returns true if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmOutletRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmOutletRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl OutletRepository for SeaOrmOutletRepository {
    async fn list(&self) -> Result<Vec<outlet::Model>, ServiceError> {
        let rows = OutletEntity::find()
            .order_by_asc(outlet::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn create(&self, input: &OutletInput) -> Result<outlet::Model, ServiceError> {
        let mut am = <outlet::ActiveModel as Default>::default();
        input.apply_to(&mut am);
        let created = am.insert(&self.db).await?;
        Ok(created)
    }

    async fn get(&self, id: i32) -> Result<Option<outlet::Model>, ServiceError> {
        Ok(OutletEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<outlet::Model>, ServiceError> {
        let found = OutletEntity::find()
            .filter(outlet::Column::Code.eq(code))
            .order_by_asc(outlet::Column::Id)
            .one(&self.db)
            .await?;
        Ok(found)
    }

    async fn replace(&self, id: i32, input: &OutletInput) -> Result<Option<outlet::Model>, ServiceError> {
        let Some(existing) = OutletEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: outlet::ActiveModel = existing.into();
        input.apply_to(&mut am);
        let updated = am.update(&self.db).await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = OutletEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
