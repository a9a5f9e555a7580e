//! Typed endpoint wrappers

pub mod dishes;

pub use dishes::DishApi;
