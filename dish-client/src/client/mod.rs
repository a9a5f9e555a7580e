//! Client module - HTTP transport.
//!
//! [`HttpClient`] is the seam the dish API is written against;
//! [`NetworkHttpClient`] is the reqwest implementation used in production.

pub mod http;

// Re-export main types
pub use http::{HttpClient, NetworkHttpClient, RequestOptions};
