use super::{Error, ErrorKind};

/// Error when a value fails a field's constraints.
#[derive(Debug)]
pub(super) struct ValidationError {
    /// Name of the field being validated, when known.
    pub(super) field: Option<Box<str>>,
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// String length constraint violation
    Length {
        value_len: usize,
        min: usize,
        max: usize,
    },

    /// Integer lower bound violation
    MinValue { value: i64, min: i64 },

    /// The value's type does not match the field's column type
    Type {
        expected: &'static str,
        actual: &'static str,
    },

    /// Fields do not accept NULL
    Null,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "invalid value for field `{field}`: ")?;
        }

        match &self.kind {
            ValidationErrorKind::Length {
                value_len,
                min,
                max,
            } => {
                if min == max {
                    write!(
                        f,
                        "value length {} does not match required length {}",
                        value_len, min
                    )
                } else if value_len < min {
                    write!(
                        f,
                        "value length {} is too short (minimum: {})",
                        value_len, min
                    )
                } else if value_len > max {
                    write!(
                        f,
                        "value length {} is too long (maximum: {})",
                        value_len, max
                    )
                } else {
                    f.write_str("length constraint violation")
                }
            }
            ValidationErrorKind::MinValue { value, min } => {
                write!(f, "value {} is below the minimum of {}", value, min)
            }
            ValidationErrorKind::Type { expected, actual } => {
                write!(f, "expected {} value, got {}", expected, actual)
            }
            ValidationErrorKind::Null => f.write_str("value must not be null"),
        }
    }
}

impl Error {
    /// Creates a validation error for a string length constraint violation.
    pub fn validation_length(value_len: usize, min: usize, max: usize) -> Error {
        Error::validation(ValidationErrorKind::Length {
            value_len,
            min,
            max,
        })
    }

    /// Creates a validation error for an integer below its lower bound.
    pub fn validation_min_value(value: i64, min: i64) -> Error {
        Error::validation(ValidationErrorKind::MinValue { value, min })
    }

    /// Creates a validation error for a value of the wrong type.
    pub fn validation_type(expected: &'static str, actual: &'static str) -> Error {
        Error::validation(ValidationErrorKind::Type { expected, actual })
    }

    /// Creates a validation error for a NULL value.
    pub fn validation_null() -> Error {
        Error::validation(ValidationErrorKind::Null)
    }

    fn validation(kind: ValidationErrorKind) -> Error {
        Error::from(ErrorKind::Validation(ValidationError { field: None, kind }))
    }

    /// Records the name of the field that failed validation.
    ///
    /// Errors of any other kind are returned unchanged.
    pub fn with_field(mut self, name: &str) -> Error {
        if let Some(ErrorKind::Validation(err)) = self.kind_mut() {
            err.field = Some(name.into());
        }
        self
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation(_))
    }

    /// Returns the name of the field that failed validation, if recorded.
    pub fn validation_field(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::Validation(err) => err.field.as_deref(),
            _ => None,
        }
    }
}
