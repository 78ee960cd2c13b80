use super::Error;
use crate::stmt::Value;

/// Error when an entity is written without a row key.
#[derive(Debug)]
pub(super) struct MissingRowKey {
    entity: Box<str>,
    attempted: Box<str>,
}

impl std::error::Error for MissingRowKey {}

impl core::fmt::Display for MissingRowKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "row key not defined for entity `{}`; row_key={}",
            self.entity, self.attempted
        )
    }
}

impl Error {
    /// Creates a missing row key error for the named entity type.
    ///
    /// `attempted` is whatever the entity held in its row key field.
    pub fn missing_row_key(entity: impl Into<String>, attempted: &Value) -> Error {
        let attempted = match attempted {
            Value::Null => "null".to_string(),
            Value::String(key) => format!("{key:?}"),
            other => other.to_string(),
        };

        Error::from(super::ErrorKind::MissingRowKey(MissingRowKey {
            entity: entity.into().into(),
            attempted: attempted.into(),
        }))
    }

    /// Returns `true` if this error is a missing row key error.
    pub fn is_missing_row_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingRowKey(_))
    }
}
