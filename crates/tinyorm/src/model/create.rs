use crate::{stmt::Value, Db, Model, Result};

use indexmap::IndexMap;
use std::{fmt, marker::PhantomData};

/// Builds one row of `M`.
///
/// Fields left unset take their default when the row is inserted.
pub struct Create<M> {
    values: IndexMap<String, Value>,
    _p: PhantomData<M>,
}

impl<M: Model> Create<M> {
    pub(crate) fn new() -> Self {
        Create {
            values: IndexMap::new(),
            _p: PhantomData,
        }
    }

    /// Sets a field's value. Setting the same field again replaces it.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Validates and inserts the row.
    pub fn exec(self, db: &mut Db) -> Result<()> {
        db.insert(M::NAME, self.values)
    }
}

impl<M: Model> fmt::Debug for Create<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Create")
            .field("model", &M::NAME)
            .field("values", &self.values)
            .finish()
    }
}
