//! User model module
//!
//! A user of the application, identified by a positive numeric id.

use serde_json::Value;

use super::field::{self, ModelError};

/// Application user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: i64,
    name: String,
}

impl User {
    /// Create a user, validating every field.
    pub fn new(id: i64, name: &str) -> Result<Self, ModelError> {
        Ok(Self {
            id: field::positive_int("id", id)?,
            name: field::non_empty_text("name", name)?,
        })
    }

    /// Build a user from an untyped JSON payload.
    pub fn from_value(raw: &Value) -> Result<Self, ModelError> {
        let obj = field::object("user", raw)?;
        Ok(Self {
            id: field::int_field("id", obj.get("id"))?,
            name: field::text_field("name", obj.get("name"))?,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the id, re-running validation.
    pub fn set_id(&mut self, id: i64) -> Result<(), ModelError> {
        self.id = field::positive_int("id", id)?;
        Ok(())
    }

    /// Replace the name, re-running validation.
    pub fn set_name(&mut self, name: &str) -> Result<(), ModelError> {
        self.name = field::non_empty_text("name", name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_round_trip() {
        let user = User::new(1, "Ali").unwrap();
        assert_eq!(user.id(), 1);
        assert_eq!(user.name(), "Ali");
    }

    #[test]
    fn test_user_non_positive_id_rejected() {
        assert!(matches!(
            User::new(0, "Ali"),
            Err(ModelError::Value { field: "id", .. })
        ));
        assert!(matches!(User::new(-3, "Ali"), Err(ModelError::Value { .. })));
    }

    #[test]
    fn test_user_wrong_name_type_rejected() {
        let raw = json!({ "id": 1, "name": 123 });
        assert!(matches!(
            User::from_value(&raw),
            Err(ModelError::Type { field: "name", .. })
        ));
    }

    #[test]
    fn test_user_wrong_id_type_is_type_not_value() {
        let raw = json!({ "id": "abc", "name": "Ali" });
        assert!(matches!(
            User::from_value(&raw),
            Err(ModelError::Type { field: "id", .. })
        ));
    }

    #[test]
    fn test_user_setter_revalidates() {
        let mut user = User::new(1, "Ali").unwrap();
        user.set_id(2).unwrap();
        assert_eq!(user.id(), 2);
        assert!(user.set_id(0).is_err());
        assert_eq!(user.id(), 2);
    }
}
