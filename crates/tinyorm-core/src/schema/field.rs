mod char_field;
pub use char_field::{CharField, CharFieldBuilder};

mod integer_field;
pub use integer_field::{IntegerField, IntegerFieldBuilder};

use crate::{stmt::Value, Result};

use std::{fmt::Debug, sync::Arc};

/// A typed column descriptor.
///
/// Implementing this trait is all a new field kind needs: the registry, the
/// statement builders and the serializers only go through these methods.
pub trait Field: Debug + Send + Sync + 'static {
    /// Column type, emitted verbatim in `CREATE TABLE`.
    fn kind(&self) -> &str;

    /// The field's default, already coerced to satisfy its own constraints.
    fn default_value(&self) -> Value;

    /// Checks `value` against the field's constraints.
    ///
    /// Values are never adjusted here; an out-of-range value is an error.
    fn validate(&self, value: &Value) -> Result<()>;
}

/// Conversion into a shareable field, used by [`ModelBuilder::field`].
///
/// Field builders implement this so that configuration errors surface when
/// the model is built.
///
/// [`ModelBuilder::field`]: crate::schema::ModelBuilder::field
pub trait IntoField {
    fn into_field(self) -> Result<Arc<dyn Field>>;
}

impl<T: Field> IntoField for T {
    fn into_field(self) -> Result<Arc<dyn Field>> {
        Ok(Arc::new(self))
    }
}

impl IntoField for Arc<dyn Field> {
    fn into_field(self) -> Result<Arc<dyn Field>> {
        Ok(self)
    }
}
