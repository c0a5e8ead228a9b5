//! HTTP protocol layer module
//!
//! Response builders and body reading shared by all handlers.

pub mod body;
pub mod response;

// Re-export commonly used items
pub use body::read_body;
pub use response::{
    aggregate_status, build_404_response, build_body_error_response, build_empty_response,
    build_text_response,
};
