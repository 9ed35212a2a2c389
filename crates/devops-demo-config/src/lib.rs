//! # DevOps Demo Config
//!
//! Configuration loading for the DevOps demo service.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
