use crate::schema::Field;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,

    /// Column type, written verbatim after the column name.
    pub ty: String,
}

impl ColumnDef {
    pub(crate) fn from_field(name: &str, field: &dyn Field) -> ColumnDef {
        ColumnDef {
            name: name.to_string(),
            ty: field.kind().to_string(),
        }
    }
}
