pub mod catalog;
pub mod service;

pub use catalog::{HttpPizzaCatalog, PizzaCatalog, DEFAULT_PIZZA_TIMEOUT};
pub use service::PizzaProxyService;
