pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{OrthosilError, Result};
