//! Request handler module
//!
//! Responsible for request routing dispatch and the endpoint bodies.
//! Handlers never call each other.

pub mod dummy;
pub mod health;
pub mod router;
pub mod utility;

// Re-export main entry point
pub use router::handle_request;
