use super::Error;

/// Error when a model or database handle is misconfigured.
///
/// This occurs when:
/// - an operation runs while the database is not connected
/// - a model declares no fields, or declares the same field twice
/// - a field's constraints contradict each other (`max_length < min_length`)
#[derive(Debug)]
pub(super) struct InvalidConfiguration {
    message: Box<str>,
}

impl std::error::Error for InvalidConfiguration {}

impl core::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfiguration(
            InvalidConfiguration {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid configuration error.
    ///
    /// Invalid connection URLs are configuration errors too.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::InvalidConfiguration(_) | super::ErrorKind::InvalidConnectionUrl(_)
        )
    }
}
