use std::fmt::{Display, Formatter};

use campus_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a record inside its collection, used as the `{id}` path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Reads an identifier out of a JSON value.
    ///
    /// Zero, blank strings and non-scalar values yield `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => {
                (number.as_i64() != Some(0)).then(|| Self(number.to_string()))
            }
            Value::String(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty() && trimmed != "0").then(|| Self(trimmed.to_owned()))
            }
            _ => None,
        }
    }

    /// Returns the identifier as a path segment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the identifier as a JSON value, numeric when it parses as one.
    #[must_use]
    pub fn to_value(&self) -> Value {
        self.0
            .parse::<u64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(self.0.clone()))
    }
}

impl Display for RecordId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// Opaque entity record addressed through configured field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord(Map<String, Value>);

impl EntityRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(AppError::Validation(format!(
                "entity record must be a JSON object, got '{other}'"
            ))),
        }
    }

    /// Returns the raw value stored under a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Stores a value under a field, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder-style variant of [`EntityRecord::set`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Reads a boolean field; anything other than JSON `true` reads as `false`.
    #[must_use]
    pub fn bool_at(&self, field: &str) -> bool {
        matches!(self.0.get(field), Some(Value::Bool(true)))
    }

    /// Reads a string field; missing or non-string values read as `""`.
    #[must_use]
    pub fn str_at(&self, field: &str) -> &str {
        self.0.get(field).and_then(Value::as_str).unwrap_or("")
    }

    /// Reads an identifier field.
    #[must_use]
    pub fn id_at(&self, field: &str) -> Option<RecordId> {
        self.0.get(field).and_then(RecordId::from_value)
    }

    /// Returns a copy with every field of `patch` layered over this record.
    #[must_use]
    pub fn merged_with(&self, patch: &EntityRecord) -> Self {
        let mut merged = self.0.clone();
        for (field, value) in &patch.0 {
            merged.insert(field.clone(), value.clone());
        }
        Self(merged)
    }

    /// Returns a copy restricted to the given fields, skipping absent ones.
    #[must_use]
    pub fn project<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> Self {
        let mut projected = Map::new();
        for field in fields {
            if let Some(value) = self.0.get(field) {
                projected.insert(field.to_owned(), value.clone());
            }
        }
        Self(projected)
    }

    /// Returns a copy with every top-level string value trimmed.
    #[must_use]
    pub fn with_trimmed_strings(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(field, value)| {
                    let value = match value {
                        Value::String(text) => Value::String(text.trim().to_owned()),
                        other => other.clone(),
                    };
                    (field.clone(), value)
                })
                .collect(),
        )
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts the record into a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for EntityRecord {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}
