use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::outlet::repository::OutletRepository;
use crate::pizza::catalog::PizzaCatalog;

/// Resolves an outlet locally, then asks the pizza service what it offers.
pub struct PizzaProxyService {
    outlets: Arc<dyn OutletRepository>,
    catalog: Arc<dyn PizzaCatalog>,
}

impl PizzaProxyService {
    pub fn new(outlets: Arc<dyn OutletRepository>, catalog: Arc<dyn PizzaCatalog>) -> Self {
        Self { outlets, catalog }
    }

    /// Unknown codes fail with `NotFound` before any outbound call is made.
    /// Every upstream failure becomes `Upstream`; there is no retry.
    #[instrument(skip(self, authorization), fields(code = %code))]
    pub async fn pizzas_for_outlet(&self, code: &str, authorization: Option<&str>) -> Result<Value, ServiceError> {
        let outlet = self
            .outlets
            .find_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::not_found("Outlet"))?;

        match self.catalog.pizzas_for_outlet(&outlet.code, authorization).await {
            Ok(body) => {
                info!(outlet_id = outlet.id, "fetched pizzas for outlet");
                Ok(body)
            }
            Err(e) => {
                warn!(outlet_id = outlet.id, outcome = e.outcome(), error = %e, "pizza service call failed");
                Err(ServiceError::Upstream(e.to_string()))
            }
        }
    }
}
