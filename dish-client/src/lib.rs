//! Dish Client - HTTP client for the dish management backend
//!
//! Typed calls for dishes and dish categories over a pluggable transport.
//!
//! ```no_run
//! use dish_client::{ClientConfig, DishApi, DishQueryParams};
//!
//! # async fn example() -> Result<(), dish_client::ClientError> {
//! let http = ClientConfig::from_env()?.build_http_client()?;
//! let api = DishApi::new(http);
//!
//! let page = api.get_dish_list(&DishQueryParams::new(1, 10)).await?;
//! println!("{} dishes", page.total);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;

pub use api::DishApi;
pub use client::{HttpClient, NetworkHttpClient, RequestOptions};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::Method;

// Re-export shared types for convenience
pub use shared::{
    ActionResult, DISHES_ROUTE, Dish, DishCategory, DishCategoryCreate, DishCategoryUpdate,
    DishCreate, DishListResponse, DishQueryParams, DishStatus, DishUpdate, RouteNode,
};
