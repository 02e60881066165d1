use super::Model;

use crate::{Error, Result};

use indexmap::IndexMap;

/// Record of every model whose table was created through one database
/// handle, keyed by model name.
///
/// A registry belongs to a single `Db`; independent handles never share one.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    models: IndexMap<String, Model>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Inserts the model, replacing any earlier definition with the same
    /// name, and returns the stored definition.
    pub fn register(&mut self, model: Model) -> &Model {
        let name = model.name.clone();
        let (index, _) = self.models.insert_full(name, model);
        &self.models[index]
    }

    /// Returns the model registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&Model> {
        self.models
            .get(name)
            .ok_or_else(|| Error::unknown_model(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Removes the model, returning its definition.
    pub fn remove(&mut self, name: &str) -> Option<Model> {
        self.models.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Registered models, in the order they were first registered.
    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> + '_ {
        self.models.values()
    }
}
