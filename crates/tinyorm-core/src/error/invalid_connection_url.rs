use super::Error;

/// Error when a connection URL cannot select or open a store.
///
/// This occurs when:
/// - the URL does not parse
/// - its scheme names no known driver (only `sqlite` is built in)
/// - a `sqlite:` URL has no database path, or a path that is not UTF-8
/// - the driver for the scheme is disabled by cargo features
///
/// A bad URL is a configuration mistake, so
/// [`Error::is_invalid_configuration`] matches this error as well.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    message: Box<str>,
}

impl std::error::Error for InvalidConnectionUrl {}

impl core::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection URL: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid connection URL error.
    pub fn invalid_connection_url(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(
            InvalidConnectionUrl {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid connection URL error.
    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}
