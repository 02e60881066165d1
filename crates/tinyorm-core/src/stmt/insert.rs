use super::{Statement, ValueRecord};

use crate::schema::Model;

/// Inserts a single row.
///
/// `columns` and `values` are positionally aligned. Values are always sent
/// to the driver as bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: ValueRecord,
}

impl Statement {
    /// Builds an insert of `values` into every column of `model`, in
    /// registration order.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not hold exactly one value per field of
    /// `model`. `Db::insert` fills defaults before building the statement,
    /// so it always passes a complete record.
    pub fn insert(model: &Model, values: ValueRecord) -> Self {
        assert_eq!(
            model.fields.len(),
            values.len(),
            "insert values must cover every column of `{}`",
            model.name
        );

        Insert {
            table: model.name.clone(),
            columns: model.fields.keys().cloned().collect(),
            values,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
