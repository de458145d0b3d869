pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{parse_outlet_id, DeletedOutlet, OutletInput};
pub use repository::{OutletRepository, SeaOrmOutletRepository};
pub use service::OutletService;
