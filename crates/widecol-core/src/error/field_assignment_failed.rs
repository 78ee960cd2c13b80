use super::Error;

/// Error when a decoded cell cannot be assigned to an entity field.
///
/// Reading tolerates these: the decoder logs the error and leaves the field
/// at its default. The cause (usually an [`Error::invalid_value`]) is kept in
/// the context chain.
#[derive(Debug)]
pub(super) struct FieldAssignmentFailed {
    field: Box<str>,
    row_key: Box<str>,
    value: Box<str>,
    entity: Box<str>,
}

impl std::error::Error for FieldAssignmentFailed {}

impl core::fmt::Display for FieldAssignmentFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to set field `{}` of `{}`; row_key={} value={}",
            self.field, self.entity, self.row_key, self.value
        )
    }
}

impl Error {
    /// Creates a field assignment error.
    pub fn field_assignment_failed(
        field: impl Into<String>,
        row_key: impl Into<String>,
        value: impl Into<String>,
        entity: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::FieldAssignmentFailed(
            FieldAssignmentFailed {
                field: field.into().into(),
                row_key: row_key.into().into(),
                value: value.into().into(),
                entity: entity.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a field assignment error.
    pub fn is_field_assignment_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldAssignmentFailed(_))
    }
}
