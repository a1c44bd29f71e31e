pub mod engine;
pub mod fetch;
pub mod normalize;
pub mod prompt;

pub use crate::utils::error::Result;
