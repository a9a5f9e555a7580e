//! API Response types
//!
//! Response bodies returned by the dish management endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::Dish;

/// 餐品列表响应
///
/// One page of dishes plus the total count across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishListResponse {
    pub list: Vec<Dish>,
    pub total: u64,
}

impl DishListResponse {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Outcome of a mutation that returns no entity (delete, status change).
///
/// Accepted wire forms:
/// ```json
/// { "success": true, "message": "deleted" }
/// ```
/// a bare `true`/`false`, or `null` / an empty body. A missing `success`
/// field and a missing body both mean success: the transport only hands
/// over bodies of 2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

impl<'de> Deserialize<'de> for ActionResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Body {
            #[serde(default = "default_success")]
            success: bool,
            #[serde(default)]
            message: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Flag(bool),
            Body(Body),
        }

        Ok(match Option::<Wire>::deserialize(deserializer)? {
            None => ActionResult::ok(),
            Some(Wire::Flag(success)) => ActionResult {
                success,
                message: None,
            },
            Some(Wire::Body(body)) => ActionResult {
                success: body.success,
                message: body.message,
            },
        })
    }
}

fn default_success() -> bool {
    true
}
