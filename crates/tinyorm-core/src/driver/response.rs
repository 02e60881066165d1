use crate::{
    stmt::{ValueRecord, ValueStream},
    Result,
};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a stream of rows
    Values(ValueStream),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn value_stream(values: impl Into<ValueStream>) -> Self {
        Self {
            rows: Rows::Values(values.into()),
        }
    }

    /// Consumes the response, returning its rows.
    pub fn into_records(self) -> Result<Vec<ValueRecord>> {
        match self.rows {
            Rows::Count(count) => Err(crate::err!(
                "expected rows from the driver, got a count of {count}"
            )),
            Rows::Values(values) => values.collect(),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }
}
