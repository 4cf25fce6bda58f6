//! HTTP protocol layer module
//!
//! Response construction shared by every handler, decoupled from the
//! page content itself.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_405_response, build_413_response, build_html_response, build_options_response,
    build_page_response,
};
