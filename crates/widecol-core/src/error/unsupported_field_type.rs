use super::Error;

/// Error when a field's declared type is outside the supported set.
///
/// The supported set is string, boolean, 16/32/64-bit integers, 32/64-bit
/// floats, and string maps for dynamic groups.
#[derive(Debug)]
pub(super) struct UnsupportedFieldType {
    ty: Box<str>,
}

impl std::error::Error for UnsupportedFieldType {}

impl core::fmt::Display for UnsupportedFieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported field type: {}", self.ty)
    }
}

impl Error {
    /// Creates an unsupported field type error.
    pub fn unsupported_field_type(ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFieldType(UnsupportedFieldType {
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported field type error.
    pub fn is_unsupported_field_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedFieldType(_))
    }
}
