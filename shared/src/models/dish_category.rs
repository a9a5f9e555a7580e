//! Dish Category Model

use serde::{Deserialize, Serialize};

/// 餐品分类
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishCategory {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// Create category payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishCategoryCreate {
    pub name: String,
}

impl DishCategoryCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Update category payload (the backend only allows renaming)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishCategoryUpdate {
    pub name: String,
}

impl DishCategoryUpdate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
