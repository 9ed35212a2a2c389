//! # DevOps Demo API
//!
//! HTTP surface of the DevOps demo service.
//!
//! Three fixed, stateless routes are exposed:
//!
//! ```text
//! GET /        - welcome message, request-time timestamp, contract version
//! GET /health  - liveness stub, always "UP"
//! GET /info    - static description of the pipeline tooling
//! ```
//!
//! Any other path falls through to axum's default 404.

pub mod error;
pub mod http;
pub mod server;

pub use error::ApiError;
pub use http::{
    handlers::{HealthResponse, HomeResponse, InfoResponse},
    routes::create_router,
};
pub use server::InfoServer;
