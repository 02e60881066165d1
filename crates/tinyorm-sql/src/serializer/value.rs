use super::{Formatter, Params, ToSql};

use crate::stmt;

/// Values are never inlined: each one becomes a bound parameter.
impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        placeholder.to_sql(f);
    }
}
