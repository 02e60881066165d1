mod response;
pub use response::{Response, Rows};

use crate::{stmt::Statement, Result};

use std::{borrow::Cow, fmt::Debug};

/// A database backend able to open connections.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL this driver was configured with.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection to the store.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A live handle to the store.
///
/// Connections are not shared: callers serialize access through `&mut`.
pub trait Connection: Debug + Send + 'static {
    /// Executes a single statement, binding its values as parameters.
    fn exec(&mut self, stmt: Statement) -> Result<Response>;

    /// Closes the connection, reporting any error the store raises while
    /// releasing it.
    fn close(self: Box<Self>) -> Result<()>;
}
