pub mod context;
pub mod error;
pub mod fixtures;

pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{test_setup_with_app_tables, test_setup_with_tables, TestContext, TestError};
}
