//! Request types for the shared crate
//!
//! Query parameters sent with list requests.

use serde::{Deserialize, Serialize};

use crate::models::DishStatus;

/// 餐品查询参数
///
/// Sent as the query string of `GET /dishes`. Filters left as `None` are
/// omitted entirely; nothing is defaulted on the client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishQueryParams {
    /// Page number (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Substring match on the dish name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DishStatus>,
}

impl DishQueryParams {
    /// Query a single page without filters
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            name: None,
            category_id: None,
            status: None,
        }
    }

    /// Filter by name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by category
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Filter by sale status
    pub fn with_status(mut self, status: DishStatus) -> Self {
        self.status = Some(status);
        self
    }
}
