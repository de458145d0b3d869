use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const CODE_MAX_LEN: usize = 32;
pub const NAME_MAX_LEN: usize = 128;
pub const ADDRESS_MAX_LEN: usize = 256;
pub const CITY_MAX_LEN: usize = 64;
pub const PHONE_MAX_LEN: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "outlet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn validate_required(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} must not be blank")));
    }
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn validate_code(code: &str) -> Result<(), ModelError> {
    validate_required("code", code, CODE_MAX_LEN)
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    validate_required("name", name, NAME_MAX_LEN)
}

/// Optional text columns only carry a length limit.
pub fn validate_optional(field: &str, value: Option<&str>, max: usize) -> Result<(), ModelError> {
    match value {
        Some(v) if v.chars().count() > max => {
            Err(ModelError::Validation(format!("{field} must be at most {max} characters")))
        }
        _ => Ok(()),
    }
}
