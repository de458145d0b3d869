use models::outlet::{self, validate_code, validate_name, validate_optional};
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Full attribute set for creating or replacing an outlet.
///
/// Used for both create and update: an update replaces every column, so an
/// omitted optional field becomes `None` and an omitted `is_active` becomes `true`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutletInput {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool { true }

impl OutletInput {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            address: None,
            city: None,
            phone: None,
            is_active: default_active(),
        }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        validate_code(&self.code)?;
        validate_name(&self.name)?;
        validate_optional("address", self.address.as_deref(), outlet::ADDRESS_MAX_LEN)?;
        validate_optional("city", self.city.as_deref(), outlet::CITY_MAX_LEN)?;
        validate_optional("phone", self.phone.as_deref(), outlet::PHONE_MAX_LEN)?;
        Ok(())
    }

    /// Overwrite every attribute column of `am`; the primary key is left alone.
    pub fn apply_to(&self, am: &mut outlet::ActiveModel) {
        am.code = Set(self.code.clone());
        am.name = Set(self.name.clone());
        am.address = Set(self.address.clone());
        am.city = Set(self.city.clone());
        am.phone = Set(self.phone.clone());
        am.is_active = Set(self.is_active);
    }
}

/// Parse an outlet id taken from a URL path.
///
/// Integers the id column cannot hold name no stored outlet and are `NotFound`;
/// anything that is not an integer is a `Validation` error.
pub fn parse_outlet_id(raw: &str) -> Result<i32, ServiceError> {
    let digits = raw.strip_prefix(&['+', '-'][..]).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::Validation(format!("outlet id must be an integer, got {raw:?}")));
    }
    raw.parse::<i32>().map_err(|_| ServiceError::not_found("Outlet"))
}

/// Outcome of a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedOutlet {
    pub id: i32,
}

impl DeletedOutlet {
    pub fn message(&self) -> String {
        format!("Outlet with ID {} has been deleted successfully", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_take_payload_defaults() {
        let input: OutletInput = serde_json::from_value(serde_json::json!({
            "code": "DEL-02",
            "name": "Connaught Place"
        }))
        .unwrap();
        assert_eq!(input, OutletInput::new("DEL-02", "Connaught Place"));
        assert!(input.is_active);
        assert!(input.address.is_none());
    }

    #[test]
    fn blank_code_is_rejected() {
        let input = OutletInput::new(" ", "Somewhere");
        assert!(matches!(input.validate(), Err(ServiceError::Model(_))));
    }

    #[test]
    fn over_long_address_is_rejected() {
        let mut input = OutletInput::new("X", "Y");
        input.address = Some("a".repeat(outlet::ADDRESS_MAX_LEN + 1));
        assert!(input.validate().is_err());
    }

    #[test]
    fn integer_ids_parse() {
        assert_eq!(parse_outlet_id("42").unwrap(), 42);
        assert_eq!(parse_outlet_id("-7").unwrap(), -7);
        assert_eq!(parse_outlet_id("2147483647").unwrap(), i32::MAX);
    }

    #[test]
    fn out_of_range_ids_are_not_found() {
        for raw in ["2147483648", "-2147483649", "9999999999", "123456789012345678901234567890"] {
            assert!(matches!(parse_outlet_id(raw), Err(ServiceError::NotFound(_))), "{raw}");
        }
    }

    #[test]
    fn non_integer_ids_are_validation_errors() {
        for raw in ["abc", "1.5", "", "-", "12x", " 3"] {
            assert!(matches!(parse_outlet_id(raw), Err(ServiceError::Validation(_))), "{raw:?}");
        }
    }

    #[test]
    fn delete_message_contains_id() {
        assert_eq!(
            DeletedOutlet { id: 7 }.message(),
            "Outlet with ID 7 has been deleted successfully"
        );
    }
}
