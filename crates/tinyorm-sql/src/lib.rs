pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub use tinyorm_core::stmt::{self, Statement};
