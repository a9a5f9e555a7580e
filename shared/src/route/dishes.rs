//! 餐品管理 menu section

use std::sync::LazyLock;

use super::{RouteComponent, RouteMeta, RouteNode};

/// Layout shell every top-level section renders into
const LAYOUT: &str = "@/layout/index.vue";

/// Dishes route tree, built on first access
pub static DISHES_ROUTE: LazyLock<RouteNode> = LazyLock::new(dishes_route);

/// Build the Dishes route tree
///
/// ```text
/// /dishes            Dishes          (redirect -> /dishes/list)
/// ├── /dishes/list      DishesList
/// └── /dishes/category  DishesCategory
/// ```
pub fn dishes_route() -> RouteNode {
    RouteNode::new(
        "/dishes",
        "Dishes",
        RouteComponent::lazy(LAYOUT),
        RouteMeta::titled("餐品管理").with_icon("ep:food").with_rank(2),
    )
    .with_redirect("/dishes/list")
    .with_children(vec![
        RouteNode::new(
            "/dishes/list",
            "DishesList",
            RouteComponent::lazy("@/views/dishes/index.vue"),
            RouteMeta::titled("餐品列表"),
        ),
        RouteNode::new(
            "/dishes/category",
            "DishesCategory",
            RouteComponent::lazy("@/views/dishes/category.vue"),
            RouteMeta::titled("餐品分类"),
        ),
    ])
}
