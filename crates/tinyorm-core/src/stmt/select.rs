use super::Statement;

use crate::schema::Model;

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    pub returning: Returning,
}

/// Columns a select returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// Every column, in the table's column order (`*`).
    Star,

    /// The listed columns, in the listed order.
    Columns(Vec<String>),
}

impl Statement {
    /// Selects `columns` from the model's table, or every column when
    /// `columns` is empty.
    pub fn select(model: &Model, columns: Vec<String>) -> Self {
        let returning = if columns.is_empty() {
            Returning::Star
        } else {
            Returning::Columns(columns)
        };

        Select {
            table: model.name.clone(),
            returning,
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
