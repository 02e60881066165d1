use crate::{Db, Model, Result};

use std::{fmt, marker::PhantomData};

/// Selects rows of `M`, formatted as strings.
pub struct Select<M> {
    columns: Vec<String>,
    _p: PhantomData<M>,
}

impl<M: Model> Select<M> {
    pub(crate) fn new() -> Self {
        Select {
            columns: vec![],
            _p: PhantomData,
        }
    }

    /// Adds a column to the result. Without any, every column is returned.
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    pub fn columns<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns.extend(names.into_iter().map(Into::into));
        self
    }

    /// Runs the select. Each row is its values joined by `" | "`, in column
    /// order.
    pub fn exec(self, db: &mut Db) -> Result<Vec<String>> {
        db.select(M::NAME, &self.columns)
    }
}

impl<M: Model> fmt::Debug for Select<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("model", &M::NAME)
            .field("columns", &self.columns)
            .finish()
    }
}
