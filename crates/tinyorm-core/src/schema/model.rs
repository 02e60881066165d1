use super::{Field, IntoField};

use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// A model's table definition: its name and its fields in declaration order.
///
/// Field order is significant: it is the column order of `CREATE TABLE`, of
/// `INSERT` column lists and of `SELECT *` results.
#[derive(Debug, Clone)]
pub struct Model {
    /// Model name, also used as the table name.
    pub name: String,

    /// Fields, keyed by column name, in declaration order.
    pub fields: IndexMap<String, Arc<dyn Field>>,
}

/// Declares a [`Model`] field by field.
#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    fields: Vec<(String, Result<Arc<dyn Field>>)>,
}

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            fields: vec![],
        }
    }

    pub fn field(&self, name: &str) -> Option<&Arc<dyn Field>> {
        self.fields.get(name)
    }

    /// Column names, in declaration order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// Like [`Model::field`], but fails with a schema error naming the model.
    pub fn expect_field(&self, name: &str) -> Result<&Arc<dyn Field>> {
        self.field(name)
            .ok_or_else(|| Error::unknown_field(&self.name, name))
    }
}

impl ModelBuilder {
    /// Appends a field. Fields keep the order they are declared in.
    pub fn field(mut self, name: impl Into<String>, field: impl IntoField) -> Self {
        self.fields.push((name.into(), field.into_field()));
        self
    }

    /// Finishes the declaration.
    ///
    /// Fails with the first field configuration error, or when a field name
    /// is declared twice. A model without fields is accepted here; creating
    /// its table is what fails.
    pub fn build(self) -> Result<Model> {
        let mut fields = IndexMap::with_capacity(self.fields.len());

        for (name, field) in self.fields {
            let field = field.map_err(|err| {
                err.context(Error::invalid_configuration(format!(
                    "field `{name}` of model `{}`",
                    self.name
                )))
            })?;

            if fields.insert(name.clone(), field).is_some() {
                return Err(Error::invalid_configuration(format!(
                    "field `{name}` is declared twice in model `{}`",
                    self.name
                )));
            }
        }

        Ok(Model {
            name: self.name,
            fields,
        })
    }
}
