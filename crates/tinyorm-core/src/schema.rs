mod field;
pub use field::{CharField, CharFieldBuilder, Field, IntegerField, IntegerFieldBuilder, IntoField};

mod model;
pub use model::{Model, ModelBuilder};

mod registry;
pub use registry::Registry;
