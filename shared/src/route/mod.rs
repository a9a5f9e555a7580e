//! Route descriptors
//!
//! Static navigation data consumed by the admin front end's router and menu.
//! A route table is plain data: the router decides when to load a component,
//! the menu renders `meta`.

pub mod dishes;

use serde::{Deserialize, Serialize};

pub use dishes::{DISHES_ROUTE, dishes_route};

/// Page component bound to a route.
///
/// The component is never loaded here. `import` is the module path the
/// router imports the first time the route is visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RouteComponent {
    Lazy { import: String },
}

impl RouteComponent {
    pub fn lazy(import: impl Into<String>) -> Self {
        Self::Lazy {
            import: import.into(),
        }
    }

    pub fn import_path(&self) -> &str {
        match self {
            Self::Lazy { import } => import,
        }
    }
}

/// Menu metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    /// Menu / tab title
    pub title: String,
    /// Icon identifier, e.g. `ep:food`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Menu ordering rank (lower comes first)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl RouteMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            rank: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }
}

/// One node of a route tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Absolute path, unique within the tree
    pub path: String,
    /// Route name, unique within the tree
    pub name: String,
    pub component: RouteComponent,
    /// Where the router goes when the section itself is opened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    pub meta: RouteMeta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        component: RouteComponent,
        meta: RouteMeta,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
            redirect: None,
            meta,
            children: Vec::new(),
        }
    }

    pub fn with_redirect(mut self, redirect: impl Into<String>) -> Self {
        self.redirect = Some(redirect.into());
        self
    }

    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order walk over this node and all of its descendants
    pub fn iter(&self) -> RouteIter<'_> {
        RouteIter { stack: vec![self] }
    }

    /// Find the node registered under `path`
    pub fn resolve(&self, path: &str) -> Option<&RouteNode> {
        self.iter().find(|node| node.path == path)
    }

    /// Find the node registered under `name`
    pub fn find_by_name(&self, name: &str) -> Option<&RouteNode> {
        self.iter().find(|node| node.name == name)
    }
}

/// Iterator returned by [`RouteNode::iter`]
pub struct RouteIter<'a> {
    stack: Vec<&'a RouteNode>,
}

impl<'a> Iterator for RouteIter<'a> {
    type Item = &'a RouteNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // reversed so the first child is visited first
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
