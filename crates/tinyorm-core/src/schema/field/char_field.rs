use super::{Field, IntoField};

use crate::{stmt::Value, Error, Result};

use std::sync::Arc;

/// A `text` column with length bounds.
///
/// Lengths are counted in characters.
#[derive(Debug, Clone, PartialEq)]
pub struct CharField {
    min_length: usize,
    max_length: usize,

    /// Coerced default: padded up to `min_length`, truncated to `max_length`.
    default: String,
}

/// Builds a [`CharField`], starting from `min_length = 0`,
/// `max_length = 100` and an empty default.
#[derive(Debug, Clone)]
pub struct CharFieldBuilder {
    min_length: usize,
    max_length: usize,
    default: String,
}

impl CharField {
    pub const KIND: &'static str = "text";

    /// Creates a field, coercing `default` into `[min_length, max_length]`.
    ///
    /// Fails when `max_length < min_length`, since no default could satisfy
    /// both bounds.
    pub fn new(min_length: usize, max_length: usize, default: impl Into<String>) -> Result<Self> {
        if max_length < min_length {
            return Err(Error::invalid_configuration(format!(
                "CharField max_length ({max_length}) is less than min_length ({min_length})"
            )));
        }

        let mut default = default.into();
        let len = default.chars().count();

        if len < min_length {
            default.extend(std::iter::repeat(' ').take(min_length - len));
        }

        if len > max_length {
            default = default.chars().take(max_length).collect();
        }

        Ok(CharField {
            min_length,
            max_length,
            default,
        })
    }

    pub fn builder() -> CharFieldBuilder {
        CharFieldBuilder {
            min_length: 0,
            max_length: 100,
            default: String::new(),
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn default(&self) -> &str {
        &self.default
    }

    fn check(&self, value: &str) -> Result<()> {
        let len = value.chars().count();

        if len < self.min_length || len > self.max_length {
            return Err(Error::validation_length(
                len,
                self.min_length,
                self.max_length,
            ));
        }

        Ok(())
    }
}

impl Field for CharField {
    fn kind(&self) -> &str {
        Self::KIND
    }

    fn default_value(&self) -> Value {
        Value::String(self.default.clone())
    }

    fn validate(&self, value: &Value) -> Result<()> {
        match value {
            Value::String(value) => self.check(value),
            Value::Null => Err(Error::validation_null()),
            other => Err(Error::validation_type(Self::KIND, other.kind_name())),
        }
    }
}

impl CharFieldBuilder {
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn build(self) -> Result<CharField> {
        CharField::new(self.min_length, self.max_length, self.default)
    }
}

impl Default for CharFieldBuilder {
    fn default() -> Self {
        CharField::builder()
    }
}

impl IntoField for CharFieldBuilder {
    fn into_field(self) -> Result<Arc<dyn Field>> {
        Ok(Arc::new(self.build()?))
    }
}
