use super::Statement;

use crate::schema::Model;

/// A statement to drop a SQL table.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    /// Name of the table.
    pub name: String,
}

impl Statement {
    /// Drops the model's table.
    ///
    /// No `IF EXISTS` clause is added: dropping a missing table is an error.
    pub fn drop_table(model: &Model) -> Self {
        DropTable {
            name: model.name.clone(),
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
