//! Currency model module
//!
//! A single currency quote: identifying codes, display name and the
//! exchange rate for a given nominal.

use serde_json::Value;

use super::field::{self, ModelError};

/// Currency quote.
///
/// `value` is the exchange rate quoted for `nominal` units of the
/// currency, e.g. a nominal of 10 means the rate covers 10 units.
#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    id: i64,
    num_code: i64,
    char_code: String,
    name: String,
    value: f64,
    nominal: i64,
}

impl Currency {
    /// Create a currency quote, validating every field.
    pub fn new(
        id: i64,
        num_code: i64,
        char_code: &str,
        name: &str,
        value: f64,
        nominal: i64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            id: field::positive_int("id", id)?,
            num_code: field::positive_int("num_code", num_code)?,
            char_code: field::non_empty_text("char_code", char_code)?,
            name: field::non_empty_text("name", name)?,
            value: field::positive_rate("value", value)?,
            nominal: field::positive_int("nominal", nominal)?,
        })
    }

    /// Build a currency quote from an untyped JSON payload.
    ///
    /// The `value` member accepts integer as well as floating-point
    /// numbers; it is stored as a float either way.
    pub fn from_value(raw: &Value) -> Result<Self, ModelError> {
        let obj = field::object("currency", raw)?;
        Ok(Self {
            id: field::int_field("id", obj.get("id"))?,
            num_code: field::int_field("num_code", obj.get("num_code"))?,
            char_code: field::text_field("char_code", obj.get("char_code"))?,
            name: field::text_field("name", obj.get("name"))?,
            value: field::rate_field("value", obj.get("value"))?,
            nominal: field::int_field("nominal", obj.get("nominal"))?,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn num_code(&self) -> i64 {
        self.num_code
    }

    pub fn char_code(&self) -> &str {
        &self.char_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn nominal(&self) -> i64 {
        self.nominal
    }

    /// Replace the id, re-running validation.
    pub fn set_id(&mut self, id: i64) -> Result<(), ModelError> {
        self.id = field::positive_int("id", id)?;
        Ok(())
    }

    /// Replace the numeric code, re-running validation.
    pub fn set_num_code(&mut self, num_code: i64) -> Result<(), ModelError> {
        self.num_code = field::positive_int("num_code", num_code)?;
        Ok(())
    }

    /// Replace the character code, re-running validation.
    pub fn set_char_code(&mut self, char_code: &str) -> Result<(), ModelError> {
        self.char_code = field::non_empty_text("char_code", char_code)?;
        Ok(())
    }

    /// Replace the name, re-running validation.
    pub fn set_name(&mut self, name: &str) -> Result<(), ModelError> {
        self.name = field::non_empty_text("name", name)?;
        Ok(())
    }

    /// Replace the rate, re-running validation.
    pub fn set_value(&mut self, value: f64) -> Result<(), ModelError> {
        self.value = field::positive_rate("value", value)?;
        Ok(())
    }

    /// Replace the nominal, re-running validation.
    pub fn set_nominal(&mut self, nominal: i64) -> Result<(), ModelError> {
        self.nominal = field::positive_int("nominal", nominal)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_currency_creation_ok() {
        let currency = Currency::new(1, 840, "USD", "US Dollar", 90.5, 1).unwrap();
        assert_eq!(currency.char_code(), "USD");
        assert_eq!(currency.num_code(), 840);
        assert_eq!(currency.value(), 90.5);
        assert_eq!(currency.nominal(), 1);
    }

    #[test]
    fn test_currency_non_positive_fields_rejected() {
        assert!(matches!(
            Currency::new(1, 840, "USD", "US Dollar", 0.0, 1),
            Err(ModelError::Value { field: "value", .. })
        ));
        assert!(matches!(
            Currency::new(1, 840, "USD", "US Dollar", 90.5, 0),
            Err(ModelError::Value { field: "nominal", .. })
        ));
        assert!(matches!(
            Currency::new(1, 0, "USD", "US Dollar", 90.5, 1),
            Err(ModelError::Value { field: "num_code", .. })
        ));
    }

    #[test]
    fn test_currency_empty_char_code_rejected() {
        assert!(matches!(
            Currency::new(1, 840, " ", "US Dollar", 90.5, 1),
            Err(ModelError::Value { field: "char_code", .. })
        ));
    }

    #[test]
    fn test_currency_value_from_integer_is_float() {
        let raw = json!({
            "id": 1,
            "num_code": 840,
            "char_code": "USD",
            "name": "US Dollar",
            "value": 91,
            "nominal": 1,
        });
        let currency = Currency::from_value(&raw).unwrap();
        assert_eq!(currency.value(), 91.0);
    }

    #[test]
    fn test_currency_non_numeric_value_is_type_error() {
        let raw = json!({
            "id": 1,
            "num_code": 840,
            "char_code": "USD",
            "name": "US Dollar",
            "value": "91",
            "nominal": 1,
        });
        assert!(matches!(
            Currency::from_value(&raw),
            Err(ModelError::Type { field: "value", .. })
        ));
    }

    #[test]
    fn test_currency_setter_revalidates() {
        let mut currency = Currency::new(1, 840, "USD", "US Dollar", 90.5, 1).unwrap();
        currency.set_value(91.2).unwrap();
        assert_eq!(currency.value(), 91.2);
        assert!(currency.set_value(-1.0).is_err());
        assert_eq!(currency.value(), 91.2);
    }
}
