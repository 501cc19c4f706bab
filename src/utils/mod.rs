pub mod error;
pub mod logger;
pub mod validation;

pub use error::{Result, TransformError};
