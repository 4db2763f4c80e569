pub mod config;
pub mod error;
pub mod yaml;

pub use error::{Error, Result};
