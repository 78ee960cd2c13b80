use super::Error;

/// A free-form error message, built by `err!` / `bail!` or when flattening a
/// chained error used as context.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl core::fmt::Display) -> AdhocError {
        AdhocError {
            message: message.to_string().into(),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error from format arguments. Prefer the `err!` macro.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        let adhoc = match args.as_str() {
            Some(message) => AdhocError::new(message),
            None => AdhocError::new(args),
        };

        Error::from(super::ErrorKind::Adhoc(adhoc))
    }

    /// Returns `true` if this error is an ad-hoc error.
    pub fn is_adhoc(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Adhoc(_))
    }
}
