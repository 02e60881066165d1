mod create;
pub use create::Create;

mod select;
pub use select::Select;

use crate::{Db, Result};

use tinyorm_core::schema;

/// A declared table.
///
/// Implementors name the model and list its fields in order:
///
/// ```
/// use tinyorm::{schema::{CharField, IntegerField, ModelBuilder}, Model};
///
/// struct Advert;
///
/// impl Model for Advert {
///     const NAME: &'static str = "Advert";
///
///     fn fields(model: ModelBuilder) -> ModelBuilder {
///         model
///             .field("title", CharField::builder().max_length(180))
///             .field("price", IntegerField::builder().min_value(0))
///     }
/// }
/// ```
pub trait Model: Sized {
    /// Model name, also used as the table name.
    const NAME: &'static str;

    /// Declares the model's fields. Declaration order is column order.
    fn fields(model: schema::ModelBuilder) -> schema::ModelBuilder;

    /// The model's table definition.
    fn schema() -> Result<schema::Model> {
        Self::fields(schema::Model::builder(Self::NAME)).build()
    }

    /// Registers the model with `db` and creates its table.
    fn create_table(db: &mut Db) -> Result<()> {
        db.create_table(Self::schema()?)
    }

    /// Drops the model's table.
    fn drop_table(db: &mut Db) -> Result<()> {
        db.drop_table(Self::NAME)
    }

    /// Starts building a row to insert.
    fn create() -> Create<Self> {
        Create::new()
    }

    /// Starts building a select over the model's table.
    fn select() -> Select<Self> {
        Select::new()
    }
}
