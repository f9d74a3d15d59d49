//! Record data model.
//!
//! A record is the single entity the service manages: a caller-chosen
//! integer id, a non-empty name, an optional description and a price.
//!
//! Serialised shape:
//! `{"id": 1, "name": "Lamp", "description": null, "price": 10.0}`

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned when constructing record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyName,
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "record name must not be empty"),
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// Caller-supplied record identifier.
///
/// Uniqueness is intended but not enforced; lookups resolve to the first
/// record carrying the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record name; never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordName(String);

impl RecordName {
    /// Validate and construct a [`RecordName`].
    ///
    /// # Examples
    /// ```
    /// use items_backend::domain::RecordName;
    ///
    /// assert!(RecordName::new("Lamp").is_ok());
    /// assert!(RecordName::new("   ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, RecordValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<RecordName> for String {
    fn from(value: RecordName) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordName {
    type Error = RecordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A single CRUD entity.
///
/// Replacement overwrites every field, so there are no partial updates.
///
/// # Examples
/// ```
/// use items_backend::domain::{Record, RecordId, RecordName};
///
/// let name = RecordName::new("Lamp").expect("valid name");
/// let record = Record::new(RecordId::new(1), name, 10.0).with_description("desk lamp");
/// assert_eq!(record.id(), RecordId::new(1));
/// assert_eq!(record.description(), Some("desk lamp"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    name: RecordName,
    #[serde(default)]
    description: Option<String>,
    price: f64,
}

impl Record {
    /// Build a record without a description.
    #[must_use]
    pub fn new(id: RecordId, name: RecordName, price: f64) -> Self {
        Self {
            id,
            name,
            description: None,
            price,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set or clear the description.
    #[must_use]
    pub fn with_optional_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Caller-supplied identifier.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Validated, non-blank name.
    pub fn name(&self) -> &RecordName {
        &self.name
    }

    /// Description, `None` when unset.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Unconstrained price.
    pub fn price(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn lamp() -> Record {
        Record::new(
            RecordId::new(1),
            RecordName::new("Lamp").expect("valid name"),
            10.0,
        )
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn name_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(
            RecordName::new(raw),
            Err(RecordValidationError::EmptyName)
        );
    }

    #[test]
    fn payload_fields_are_exposed_through_accessors() {
        let record: Record = serde_json::from_value(
            json!({ "id": 4, "name": "Chair", "description": "Oak", "price": 45.5 }),
        )
        .expect("deserialise");
        assert_eq!(record.id(), RecordId::new(4));
        assert_eq!(record.name(), &RecordName::new("Chair").expect("valid name"));
        assert_eq!(record.description(), Some("Oak"));
        assert!((record.price() - 45.5).abs() < f64::EPSILON);
    }

    #[test]
    fn absent_description_serialises_as_null() {
        let value = serde_json::to_value(lamp()).expect("serialise");
        assert_eq!(
            value,
            json!({ "id": 1, "name": "Lamp", "description": null, "price": 10.0 })
        );
    }

    #[test]
    fn missing_description_deserialises_as_none() {
        let record: Record = serde_json::from_value(json!({ "id": 1, "name": "Lamp", "price": 10.0 }))
            .expect("deserialise");
        assert_eq!(record, lamp());
        assert!(record.description().is_none());
    }

    #[test]
    fn empty_description_is_kept_distinct_from_none() {
        let record: Record = serde_json::from_value(
            json!({ "id": 1, "name": "Lamp", "description": "", "price": 10.0 }),
        )
        .expect("deserialise");
        assert_eq!(record.description(), Some(""));
    }

    #[test]
    fn blank_name_fails_deserialisation() {
        let result: Result<Record, _> =
            serde_json::from_value(json!({ "id": 1, "name": " ", "price": 10.0 }));
        let err = result.expect_err("blank name rejected");
        assert!(err.to_string().contains("record name must not be empty"));
    }
}
