//! HTTP protocol layer module
//!
//! Response builders, CORS decoration, and MIME lookup, decoupled from the
//! request handling logic.

pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_file_response, build_options_response,
};
