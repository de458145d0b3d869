use std::sync::Arc;

use service::{
    outlet::{OutletRepository, OutletService},
    pizza::{PizzaCatalog, PizzaProxyService},
};

use crate::auth::{Authenticator, PassThroughAuthenticator};

#[derive(Clone)]
pub struct AppState {
    pub outlets: Arc<OutletService>,
    pub pizzas: Arc<PizzaProxyService>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(repo: Arc<dyn OutletRepository>, catalog: Arc<dyn PizzaCatalog>) -> Self {
        Self {
            outlets: Arc::new(OutletService::new(Arc::clone(&repo))),
            pizzas: Arc::new(PizzaProxyService::new(repo, catalog)),
            authenticator: Arc::new(PassThroughAuthenticator),
        }
    }

    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }
}
