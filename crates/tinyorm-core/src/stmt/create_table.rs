use super::{ColumnDef, Statement};

use crate::schema::Model;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions, in declaration order
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    pub fn create_table(model: &Model) -> Self {
        CreateTable {
            name: model.name.clone(),
            columns: model
                .fields
                .iter()
                .map(|(name, field)| ColumnDef::from_field(name, &**field))
                .collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
