//! User-to-currency link model module
//!
//! Declared many-to-many link between users and currencies.

use serde_json::Value;

use super::field::{self, ModelError};

// TODO: route the user detail page through these links instead of the
// id -> char-code table once currencies have stable ids from a real feed
/// Link record connecting a user to a currency (reserved, not yet used
/// by the subscription lookup).
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub struct UserCurrency {
    id: i64,
    user_id: i64,
    currency_id: i64,
}

#[allow(dead_code)]
impl UserCurrency {
    /// Create a link record, validating every field.
    pub fn new(id: i64, user_id: i64, currency_id: i64) -> Result<Self, ModelError> {
        Ok(Self {
            id: field::positive_int("id", id)?,
            user_id: field::positive_int("user_id", user_id)?,
            currency_id: field::positive_int("currency_id", currency_id)?,
        })
    }

    /// Build a link record from an untyped JSON payload.
    pub fn from_value(raw: &Value) -> Result<Self, ModelError> {
        let obj = field::object("user_currency", raw)?;
        Ok(Self {
            id: field::int_field("id", obj.get("id"))?,
            user_id: field::int_field("user_id", obj.get("user_id"))?,
            currency_id: field::int_field("currency_id", obj.get("currency_id"))?,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn currency_id(&self) -> i64 {
        self.currency_id
    }

    /// Replace the link id, re-running validation.
    pub fn set_id(&mut self, id: i64) -> Result<(), ModelError> {
        self.id = field::positive_int("id", id)?;
        Ok(())
    }

    /// Replace the user id, re-running validation.
    pub fn set_user_id(&mut self, user_id: i64) -> Result<(), ModelError> {
        self.user_id = field::positive_int("user_id", user_id)?;
        Ok(())
    }

    /// Replace the currency id, re-running validation.
    pub fn set_currency_id(&mut self, currency_id: i64) -> Result<(), ModelError> {
        self.currency_id = field::positive_int("currency_id", currency_id)?;
        Ok(())
    }
}
