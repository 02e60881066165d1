mod value;
pub(crate) use value::Value;

use percent_encoding::percent_decode_str;
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tinyorm_core::{
    driver::{Driver, Response},
    stmt::{self, Statement},
    Result,
};
use tinyorm_sql as sql;
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            tinyorm_core::Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(tinyorm_core::Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            return Ok(Self::InMemory);
        }

        if url.path().is_empty() {
            return Err(tinyorm_core::Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            )));
        }

        // `Url` keeps the path percent-encoded
        let path = percent_decode_str(url.path()).decode_utf8().map_err(|err| {
            tinyorm_core::Error::invalid_connection_url(format!(
                "database path is not valid UTF-8: {err}; url={url_str}"
            ))
        })?;

        Ok(Self::File(PathBuf::from(path.as_ref())))
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connect(&self) -> Result<Box<dyn tinyorm_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory()
            .map_err(tinyorm_core::Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(tinyorm_core::Error::driver_operation_failed)?;
        let sqlite = Self { connection };
        Ok(sqlite)
    }
}

impl tinyorm_core::driver::Connection for Connection {
    fn exec(&mut self, stmt: Statement) -> Result<Response> {
        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::sqlite().serialize(&stmt, &mut params);

        log::trace!("sqlite: {sql_str}; params={params:?}");

        let mut prepared = self
            .connection
            .prepare(&sql_str)
            .map_err(tinyorm_core::Error::driver_operation_failed)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        if !stmt.returns_rows() {
            let count = prepared
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(tinyorm_core::Error::driver_operation_failed)?;

            return Ok(Response::count(count as _));
        }

        let width = prepared.column_count();

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(tinyorm_core::Error::driver_operation_failed)?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);

                    for index in 0..width {
                        items.push(Value::from_sql(row, index)?.into_inner());
                    }

                    ret.push(stmt::ValueRecord::from_vec(items));
                }
                Ok(None) => break,
                Err(err) => {
                    return Err(tinyorm_core::Error::driver_operation_failed(err));
                }
            }
        }

        Ok(Response::value_stream(ret))
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, err)| tinyorm_core::Error::driver_operation_failed(err))
    }
}
