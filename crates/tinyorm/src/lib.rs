pub mod db;
pub use db::Db;

pub mod driver;

mod model;
pub use model::{Create, Model, Select};

pub mod schema {
    pub use tinyorm_core::schema::*;
}

pub mod stmt {
    pub use tinyorm_core::stmt::{Value, ValueRecord};
}

pub use tinyorm_core::{Error, Result};
