use std::sync::Arc;

use models::outlet;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::outlet::domain::{DeletedOutlet, OutletInput};
use crate::outlet::repository::OutletRepository;

/// Application service for outlet records.
pub struct OutletService {
    repo: Arc<dyn OutletRepository>,
}

impl OutletService {
    pub fn new(repo: Arc<dyn OutletRepository>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create(&self, input: OutletInput) -> Result<outlet::Model, ServiceError> {
        input.validate()?;
        let created = self.repo.create(&input).await?;
        info!(id = created.id, code = %created.code, "created outlet");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<outlet::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<outlet::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("Outlet"))
    }

    pub async fn get_by_code(&self, code: &str) -> Result<outlet::Model, ServiceError> {
        self.repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::not_found("Outlet"))
    }

    /// Full replace; not a partial patch.
    #[instrument(skip(self, input), fields(id = id))]
    pub async fn update(&self, id: i32, input: OutletInput) -> Result<outlet::Model, ServiceError> {
        input.validate()?;
        let updated = self
            .repo
            .replace(id, &input)
            .await?
            .ok_or_else(|| ServiceError::not_found("Outlet"))?;
        info!(id = updated.id, "updated outlet");
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = id))]
    pub async fn delete(&self, id: i32) -> Result<DeletedOutlet, ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Outlet"));
        }
        info!(id, "deleted outlet");
        Ok(DeletedOutlet { id })
    }
}
