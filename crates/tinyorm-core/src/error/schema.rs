use super::Error;

/// Error when an operation references a model or column the schema registry
/// does not know about.
#[derive(Debug)]
pub(super) enum SchemaError {
    /// The model's table was never created through this database handle.
    UnknownModel { model: Box<str> },

    /// The model is registered but has no field with this name.
    UnknownField { model: Box<str>, field: Box<str> },
}

impl std::error::Error for SchemaError {}

impl core::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            SchemaError::UnknownModel { model } => write!(f, "unknown model `{model}`"),
            SchemaError::UnknownField { model, field } => {
                write!(f, "model `{model}` has no field `{field}`")
            }
        }
    }
}

impl Error {
    /// Creates an error for a model that is not registered.
    pub fn unknown_model(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Schema(SchemaError::UnknownModel {
            model: model.into().into(),
        }))
    }

    /// Creates an error for a column that is not part of a registered model.
    pub fn unknown_field(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Schema(SchemaError::UnknownField {
            model: model.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema lookup error.
    pub fn is_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Schema(_))
    }

    pub fn is_unknown_model(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::Schema(SchemaError::UnknownModel { .. })
        )
    }

    pub fn is_unknown_field(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::Schema(SchemaError::UnknownField { .. })
        )
    }
}
