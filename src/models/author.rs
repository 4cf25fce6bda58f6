//! Author model module
//!
//! The author of the application: a display name and the group the
//! author belongs to.

use serde_json::Value;

use super::field::{self, ModelError};

/// Application author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    group: String,
}

impl Author {
    /// Create an author, validating every field.
    pub fn new(name: &str, group: &str) -> Result<Self, ModelError> {
        Ok(Self {
            name: field::non_empty_text("name", name)?,
            group: field::non_empty_text("group", group)?,
        })
    }

    /// Build an author from an untyped JSON payload.
    ///
    /// Wrong field types report `ModelError::Type`; well-typed but
    /// invalid values report `ModelError::Value`.
    pub fn from_value(raw: &Value) -> Result<Self, ModelError> {
        let obj = field::object("author", raw)?;
        Ok(Self {
            name: field::text_field("name", obj.get("name"))?,
            group: field::text_field("group", obj.get("group"))?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Replace the name, re-running validation.
    pub fn set_name(&mut self, name: &str) -> Result<(), ModelError> {
        self.name = field::non_empty_text("name", name)?;
        Ok(())
    }

    /// Replace the group, re-running validation.
    pub fn set_group(&mut self, group: &str) -> Result<(), ModelError> {
        self.group = field::non_empty_text("group", group)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_author_creation_ok() {
        let author = Author::new("Test Author", "P3123").unwrap();
        assert_eq!(author.name(), "Test Author");
        assert_eq!(author.group(), "P3123");
    }

    #[test]
    fn test_author_empty_name_rejected() {
        assert!(matches!(
            Author::new("", "P3123"),
            Err(ModelError::Value { field: "name", .. })
        ));
        assert!(matches!(
            Author::new("Name", "  "),
            Err(ModelError::Value { field: "group", .. })
        ));
    }

    #[test]
    fn test_author_wrong_type_rejected() {
        let raw = json!({ "name": 123, "group": "P3123" });
        assert!(matches!(
            Author::from_value(&raw),
            Err(ModelError::Type { field: "name", .. })
        ));
    }

    #[test]
    fn test_author_setter_revalidates() {
        let mut author = Author::new("Name", "P3123").unwrap();
        author.set_name("Other").unwrap();
        assert_eq!(author.name(), "Other");
        assert!(author.set_name("").is_err());
        // A failed setter leaves the previous value in place
        assert_eq!(author.name(), "Other");
    }
}
