use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};
use tinyorm::driver::{Connection, Driver, Response, Rows};
use tinyorm_core::{
    stmt::{Statement, ValueRecord},
    Result,
};

/// Shared log of every statement executed through a [`LoggingDriver`].
pub type OpsLog = Arc<Mutex<Vec<DriverOp>>>;

#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    /// Using Arc<Mutex> for thread-safe access from tests
    ops_log: OpsLog,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> OpsLog {
        self.ops_log.clone()
    }
}

impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect()?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverOp {
    pub statement: Statement,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Count(u64),
    Rows(Vec<ValueRecord>),
    Failed(String),
}

impl DriverOp {
    pub fn is_insert(&self) -> bool {
        self.statement.is_insert()
    }

    pub fn failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}

/// A connection wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes operations
    inner: Box<dyn Connection>,

    ops_log: OpsLog,
}

impl Connection for LoggingConnection {
    fn exec(&mut self, statement: Statement) -> Result<Response> {
        let result = self.inner.exec(statement.clone());

        // Buffer the rows so they can be both logged and returned
        let (outcome, result) = match result {
            Ok(Response {
                rows: Rows::Count(count),
            }) => (Outcome::Count(count), Ok(Response::count(count))),
            Ok(Response {
                rows: Rows::Values(values),
            }) => match values.collect() {
                Ok(records) => (
                    Outcome::Rows(records.clone()),
                    Ok(Response::value_stream(records)),
                ),
                Err(err) => (Outcome::Failed(err.to_string()), Err(err)),
            },
            Err(err) => (Outcome::Failed(err.to_string()), Err(err)),
        };

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp { statement, outcome });

        result
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.inner.close()
    }
}
