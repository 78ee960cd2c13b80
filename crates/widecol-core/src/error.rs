mod adhoc;
mod driver_operation_failed;
mod field_assignment_failed;
mod invalid_connection_url;
mod invalid_schema;
mod invalid_type_conversion;
mod invalid_value;
mod missing_row_key;
mod unsupported_field_type;

use adhoc::AdhocError;
use driver_operation_failed::DriverOperationFailed;
use field_assignment_failed::FieldAssignmentFailed;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_schema::InvalidSchema;
use invalid_type_conversion::InvalidTypeConversion;
use invalid_value::InvalidValue;
use missing_row_key::MissingRowKey;
use std::sync::Arc;
use unsupported_field_type::UnsupportedFieldType;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in widecol.
///
/// The error is a single pointer wide and cheap to clone. Context added with
/// [`Error::context`] is kept as a chain and displayed outermost first.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

/// Conversion into an [`Error`], used by [`Error::context`].
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    fn into_error(self) -> Error {
        self
    }
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match Arc::try_unwrap(consequent.inner) {
            Ok(inner) if inner.cause.is_none() => inner.kind,
            // The consequent already carries a chain (or is shared); flatten it
            // into a message so this error becomes its cause.
            Ok(inner) => ErrorKind::Adhoc(AdhocError::new(Error {
                inner: Arc::new(inner),
            })),
            Err(shared) => ErrorKind::Adhoc(AdhocError::new(Error { inner: shared })),
        };

        Error {
            inner: Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            }),
        }
    }

    /// The innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = &err.inner.cause {
            err = cause;
        }
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Returns `true` if any error in the chain satisfies `f`.
    ///
    /// Predicates such as [`Error::is_missing_row_key`] only look at the
    /// outermost error; use this to look through added context.
    pub fn any(&self, f: impl Fn(&Error) -> bool) -> bool {
        self.chain().any(|err| f(err))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    DriverOperationFailed(DriverOperationFailed),
    FieldAssignmentFailed(FieldAssignmentFailed),
    InvalidConnectionUrl(InvalidConnectionUrl),
    InvalidSchema(InvalidSchema),
    InvalidTypeConversion(InvalidTypeConversion),
    InvalidValue(InvalidValue),
    MissingRowKey(MissingRowKey),
    UnsupportedFieldType(UnsupportedFieldType),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            FieldAssignmentFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            InvalidTypeConversion(err) => core::fmt::Display::fmt(err, f),
            InvalidValue(err) => core::fmt::Display::fmt(err, f),
            MissingRowKey(err) => core::fmt::Display::fmt(err, f),
            UnsupportedFieldType(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}
