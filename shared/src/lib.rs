//! Shared types for the dish management client
//!
//! Wire models for dishes and dish categories, list/query request and
//! response types, and the route descriptors of the admin menu.

pub mod models;
pub mod request;
pub mod response;
pub mod route;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Dish, DishCategory, DishCategoryCreate, DishCategoryUpdate, DishCreate, DishStatus,
    DishStatusChange, DishUpdate,
};
pub use request::DishQueryParams;
pub use response::{ActionResult, DishListResponse};
pub use route::{DISHES_ROUTE, RouteComponent, RouteMeta, RouteNode};
