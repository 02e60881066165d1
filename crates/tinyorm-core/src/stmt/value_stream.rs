use super::ValueRecord;

use crate::Result;

use std::{collections::VecDeque, fmt};

/// Rows returned by a driver.
///
/// The stream is consumed as it is iterated; it cannot be restarted.
pub struct ValueStream {
    buffer: VecDeque<ValueRecord>,
    iter: Option<Box<dyn Iterator<Item = Result<ValueRecord>> + Send + 'static>>,
}

impl ValueStream {
    pub fn from_vec(records: Vec<ValueRecord>) -> Self {
        Self {
            buffer: records.into(),
            iter: None,
        }
    }

    /// Wraps a lazily evaluated sequence of rows.
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<ValueRecord>> + Send + 'static,
    {
        Self {
            buffer: VecDeque::new(),
            iter: Some(Box::new(iter)),
        }
    }

    /// Drains the remaining rows, stopping at the first error.
    pub fn collect(self) -> Result<Vec<ValueRecord>> {
        Iterator::collect(self)
    }
}

impl Iterator for ValueStream {
    type Item = Result<ValueRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(record) = self.buffer.pop_front() {
            return Some(Ok(record));
        }

        self.iter.as_mut()?.next()
    }
}

impl Default for ValueStream {
    fn default() -> Self {
        Self::from_vec(vec![])
    }
}

impl From<Vec<ValueRecord>> for ValueStream {
    fn from(value: Vec<ValueRecord>) -> Self {
        Self::from_vec(value)
    }
}

impl fmt::Debug for ValueStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueStream")
            .field("buffer", &self.buffer)
            .field("iter", &self.iter.as_ref().map(|_| "..."))
            .finish()
    }
}
