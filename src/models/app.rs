//! Application model module
//!
//! Metadata about the application itself: name, version string and the
//! author who built it.

use serde_json::Value;

use super::author::Author;
use super::field::{self, ModelError};

/// Application metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    name: String,
    version: String,
    author: Author,
}

impl App {
    /// Create the application record, validating every field.
    ///
    /// The version is only checked for being non-empty; no particular
    /// version format is enforced.
    pub fn new(name: &str, version: &str, author: Author) -> Result<Self, ModelError> {
        Ok(Self {
            name: field::non_empty_text("name", name)?,
            version: field::non_empty_text("version", version)?,
            author,
        })
    }

    /// Build the application record from an untyped JSON payload.
    ///
    /// The `author` member must itself be an object describing an
    /// author, otherwise the failure is a type error.
    pub fn from_value(raw: &Value) -> Result<Self, ModelError> {
        let obj = field::object("app", raw)?;
        let author = match obj.get("author") {
            Some(value) => Author::from_value(value)?,
            None => {
                return Err(ModelError::Type {
                    field: "author",
                    expected: "object",
                })
            }
        };
        Ok(Self {
            name: field::text_field("name", obj.get("name"))?,
            version: field::text_field("version", obj.get("version"))?,
            author,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Replace the name, re-running validation.
    pub fn set_name(&mut self, name: &str) -> Result<(), ModelError> {
        self.name = field::non_empty_text("name", name)?;
        Ok(())
    }

    /// Replace the version, re-running validation.
    pub fn set_version(&mut self, version: &str) -> Result<(), ModelError> {
        self.version = field::non_empty_text("version", version)?;
        Ok(())
    }

    /// Replace the author. A valid `Author` is guaranteed by its own
    /// constructor, so this cannot fail.
    pub fn set_author(&mut self, author: Author) {
        self.author = author;
    }
}
