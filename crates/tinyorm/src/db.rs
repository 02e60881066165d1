mod builder;
pub use builder::Builder;

use crate::{driver::Driver, Result};

use indexmap::IndexMap;
use tinyorm_core::{
    schema::{self, Registry},
    stmt::{Statement, Value, ValueRecord},
    Connection, Error,
};

/// A database handle.
///
/// Owns the driver, at most one open connection and the schema registry of
/// every model whose table was created through it. Operations take
/// `&mut self`, so a handle runs one statement at a time.
#[derive(Debug)]
pub struct Db {
    driver: Box<dyn Driver>,
    connection: Option<Box<dyn Connection>>,
    registry: Registry,

    /// Models declared through [`Builder::register`], created by
    /// [`Db::create_tables`].
    declared: Vec<schema::Model>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates an unconnected handle over `driver`.
    pub fn new(driver: impl Driver) -> Db {
        Db::from_boxed(Box::new(driver), vec![])
    }

    fn from_boxed(driver: Box<dyn Driver>, declared: Vec<schema::Model>) -> Db {
        Db {
            driver,
            connection: None,
            registry: Registry::new(),
            declared,
        }
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// Models whose tables were created through this handle.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Opens the connection.
    pub fn connect(&mut self) -> Result<()> {
        if self.connection.is_some() {
            return Err(Error::invalid_configuration(format!(
                "database is already connected; url={}",
                self.driver.url()
            )));
        }

        log::debug!("connecting; url={}", self.driver.url());
        self.connection = Some(self.driver.connect()?);
        Ok(())
    }

    /// Closes the connection, if one is open.
    ///
    /// The handle can be connected again afterwards.
    pub fn close(&mut self) -> Result<()> {
        match self.connection.take() {
            Some(connection) => {
                log::debug!("closing connection; url={}", self.driver.url());
                connection.close()
            }
            None => Ok(()),
        }
    }

    /// Registers `model` and creates its table.
    ///
    /// A model without fields is rejected before anything is sent to the
    /// store. If the store rejects the statement (for example because the
    /// table exists) the registration is kept.
    ///
    /// The registry is not checked against the store. Declaring an existing
    /// table again with different fields replaces the registered columns
    /// even though the table keeps its old ones, so later inserts and
    /// selects are checked against columns the table does not have.
    pub fn create_table(&mut self, model: schema::Model) -> Result<()> {
        self.connection()?;

        if model.fields.is_empty() {
            return Err(Error::invalid_configuration(format!(
                "model `{}` declares no fields",
                model.name
            )));
        }

        let stmt = Statement::create_table(self.registry.register(model));

        log::info!("creating table `{}`", stmt.table());
        self.exec(stmt)?;
        Ok(())
    }

    /// Creates the tables of every model declared through the builder, in
    /// declaration order. Stops at the first failure.
    pub fn create_tables(&mut self) -> Result<()> {
        for model in self.declared.clone() {
            self.create_table(model)?;
        }
        Ok(())
    }

    /// Drops the model's table.
    ///
    /// The registry entry is kept: later inserts and selects still resolve
    /// the model and fail in the store instead.
    pub fn drop_table(&mut self, model: &str) -> Result<()> {
        self.connection()?;

        let stmt = Statement::drop_table(self.registry.lookup(model)?);

        log::info!("dropping table `{}`", stmt.table());
        self.exec(stmt)?;
        Ok(())
    }

    /// Inserts one row into the model's table.
    ///
    /// Columns missing from `values` take their field's default. Every value
    /// is validated before the statement is built, so a failing value
    /// inserts nothing.
    pub fn insert(&mut self, model: &str, mut values: IndexMap<String, Value>) -> Result<()> {
        self.connection()?;

        let schema = self.registry.lookup(model)?;

        if let Some(name) = values.keys().find(|name| schema.field(name).is_none()) {
            return Err(Error::unknown_field(model, name.as_str()));
        }

        let record = schema
            .fields
            .iter()
            .map(|(name, field)| -> Result<Value> {
                let value = values
                    .shift_remove(name)
                    .unwrap_or_else(|| field.default_value());

                field
                    .validate(&value)
                    .map_err(|err| err.with_field(name))?;
                Ok(value)
            })
            .collect::<Result<ValueRecord>>()?;

        let stmt = Statement::insert(schema, record);
        self.exec(stmt)?;
        Ok(())
    }

    /// Selects `columns` (every column when empty) and formats each row as
    /// its values joined by `" | "`.
    pub fn select(&mut self, model: &str, columns: &[String]) -> Result<Vec<String>> {
        self.connection()?;

        let schema = self.registry.lookup(model)?;

        for column in columns {
            schema.expect_field(column)?;
        }

        let stmt = Statement::select(schema, columns.to_vec());
        let records = self.exec(stmt)?.into_records()?;

        Ok(records.iter().map(ToString::to_string).collect())
    }

    fn connection(&mut self) -> Result<&mut Box<dyn Connection>> {
        self.connection
            .as_mut()
            .ok_or_else(|| Error::invalid_configuration("database is not connected"))
    }

    fn exec(&mut self, stmt: Statement) -> Result<crate::driver::Response> {
        log::debug!(
            "exec {} on `{}`",
            match &stmt {
                Statement::CreateTable(_) => "CREATE TABLE",
                Statement::DropTable(_) => "DROP TABLE",
                Statement::Insert(_) => "INSERT",
                Statement::Select(_) => "SELECT",
            },
            stmt.table()
        );

        self.connection()?.exec(stmt)
    }
}
