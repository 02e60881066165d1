use super::Db;
use crate::{driver::Driver, Model, Result};

use tinyorm_core::schema;

#[derive(Default)]
pub struct Builder {
    /// Declarations of registered models, in registration order. Errors are
    /// reported when the handle is built.
    models: Vec<Result<schema::Model>>,
}

impl Builder {
    /// Declares `T` so that [`Db::create_tables`] creates its table.
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models.push(T::schema());
        self
    }

    /// Builds a handle for `url` and opens its connection.
    pub fn connect(&mut self, url: &str) -> Result<Db> {
        let mut db = self.build_boxed(crate::driver::from_url(url)?)?;
        db.connect()?;
        Ok(db)
    }

    /// Builds an unconnected handle over `driver`.
    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_boxed(Box::new(driver))
    }

    fn build_boxed(&mut self, driver: Box<dyn Driver>) -> Result<Db> {
        let declared = std::mem::take(&mut self.models)
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        Ok(Db::from_boxed(driver, declared))
    }
}
