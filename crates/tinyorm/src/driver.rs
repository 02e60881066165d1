use crate::Result;

pub use tinyorm_core::driver::{Connection, Driver, Response, Rows};

use url::Url;

/// Returns the built-in driver for a connection URL.
///
/// The URL scheme selects the driver: `sqlite::memory:` or
/// `sqlite:<path>`. Schemes whose driver feature is disabled are rejected.
pub fn from_url(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url).map_err(|err| {
        tinyorm_core::Error::invalid_connection_url(format!("{err}; url={url}"))
    })?;

    match parsed.scheme() {
        "sqlite" => connect_sqlite(url),
        scheme => Err(tinyorm_core::Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(tinyorm_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Err(tinyorm_core::Error::invalid_connection_url(format!(
        "`sqlite` feature not enabled; url={url}"
    )))
}
