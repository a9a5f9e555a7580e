//! Data models
//!
//! Mirrors of the backend's dish management schema. Wire names are camelCase.
//! All IDs are `i64`.

pub mod dish;
pub mod dish_category;

// Re-exports
pub use dish::*;
pub use dish_category::*;
