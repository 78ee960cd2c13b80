use super::Error;
use crate::stmt::Type;

/// Error when stored text does not parse as the field's declared type.
#[derive(Debug)]
pub(super) struct InvalidValue {
    raw: Box<str>,
    ty: Type,
    reason: Box<str>,
}

impl std::error::Error for InvalidValue {}

impl core::fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot decode `{}` as {:?}: {}",
            self.raw, self.ty, self.reason
        )
    }
}

impl Error {
    /// Creates an invalid value error.
    pub fn invalid_value(raw: impl Into<String>, ty: Type, reason: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::InvalidValue(InvalidValue {
            raw: raw.into().into(),
            ty,
            reason: reason.to_string().into(),
        }))
    }

    /// Returns `true` if this error is an invalid value error.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidValue(_))
    }
}
