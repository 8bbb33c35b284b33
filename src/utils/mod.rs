pub mod error;
pub mod logging;
pub mod terminal;

pub use error::{GitBatchError, Result};
pub use logging::init_logging;
pub use terminal::is_non_interactive;
