use super::{Field, IntoField};

use crate::{stmt::Value, Error, Result};

use std::sync::Arc;

/// An `integer` column with a lower bound.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerField {
    min_value: i64,

    /// Coerced default: never below `min_value`.
    default: i64,
}

/// Builds an [`IntegerField`], starting from `min_value = -1000` and a
/// default of `0`.
#[derive(Debug, Clone)]
pub struct IntegerFieldBuilder {
    min_value: i64,
    default: i64,
}

impl IntegerField {
    pub const KIND: &'static str = "integer";

    /// Creates a field, clamping `default` up to `min_value`.
    pub fn new(min_value: i64, default: i64) -> Self {
        IntegerField {
            min_value,
            default: default.max(min_value),
        }
    }

    pub fn builder() -> IntegerFieldBuilder {
        IntegerFieldBuilder {
            min_value: -1000,
            default: 0,
        }
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn default(&self) -> i64 {
        self.default
    }
}

impl Field for IntegerField {
    fn kind(&self) -> &str {
        Self::KIND
    }

    fn default_value(&self) -> Value {
        Value::I64(self.default)
    }

    fn validate(&self, value: &Value) -> Result<()> {
        match value {
            Value::I64(value) if *value < self.min_value => {
                Err(Error::validation_min_value(*value, self.min_value))
            }
            Value::I64(_) => Ok(()),
            Value::Null => Err(Error::validation_null()),
            other => Err(Error::validation_type(Self::KIND, other.kind_name())),
        }
    }
}

impl IntegerFieldBuilder {
    pub fn min_value(mut self, min_value: i64) -> Self {
        self.min_value = min_value;
        self
    }

    pub fn default(mut self, default: i64) -> Self {
        self.default = default;
        self
    }

    pub fn build(self) -> IntegerField {
        IntegerField::new(self.min_value, self.default)
    }
}

impl Default for IntegerFieldBuilder {
    fn default() -> Self {
        IntegerField::builder()
    }
}

impl IntoField for IntegerFieldBuilder {
    fn into_field(self) -> Result<Arc<dyn Field>> {
        Ok(Arc::new(self.build()))
    }
}
