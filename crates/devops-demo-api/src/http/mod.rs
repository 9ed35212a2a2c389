//! HTTP module.
//!
//! Handlers for the informational endpoints and the route table
//! that wires them up.

pub mod handlers;
pub mod routes;
