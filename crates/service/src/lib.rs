//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Outbound calls to the pizza service live behind the `PizzaCatalog` trait.

pub mod errors;
pub mod outlet;
pub mod pizza;
#[cfg(test)]
pub mod test_support;
