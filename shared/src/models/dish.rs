//! Dish Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sale status of a dish.
///
/// The integer encoding belongs to the backend. `ON_SALE` and `OFF_SALE`
/// name the two values the admin UI toggles between; any other value is
/// carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishStatus(pub i32);

impl DishStatus {
    pub const OFF_SALE: DishStatus = DishStatus(0);
    pub const ON_SALE: DishStatus = DishStatus(1);

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn is_on_sale(self) -> bool {
        self == Self::ON_SALE
    }
}

impl From<i32> for DishStatus {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for DishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 餐品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: String,
    /// Category reference (DishCategory.id)
    pub category_id: i64,
    pub price: f64,
    /// Image URL
    pub image: String,
    pub description: String,
    pub status: DishStatus,
    /// Number of sales, maintained by the backend
    pub sale_num: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// Create dish payload
///
/// Everything a [`Dish`] has except the server-assigned id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishCreate {
    pub name: String,
    pub category_id: i64,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub status: DishStatus,
    pub sale_num: i64,
}

/// Update dish payload
///
/// Only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DishStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_num: Option<i64>,
}

/// Status patch payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishStatusChange {
    pub status: DishStatus,
}

impl From<Dish> for DishCreate {
    fn from(dish: Dish) -> Self {
        Self {
            name: dish.name,
            category_id: dish.category_id,
            price: dish.price,
            image: dish.image,
            description: dish.description,
            status: dish.status,
            sale_num: dish.sale_num,
        }
    }
}
