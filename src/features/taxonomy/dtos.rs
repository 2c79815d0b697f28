use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::tree::{CategoryPage, MenuEntry, TaxonomyNode};

/// Taxonomy node with its whole subtree
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(no_recursion)]
pub struct TaxonomyTreeDto {
    pub name: String,
    pub path: String,
    pub icon: String,
    pub description: String,
    pub children: Vec<TaxonomyTreeDto>,
}

impl From<&TaxonomyNode> for TaxonomyTreeDto {
    fn from(node: &TaxonomyNode) -> Self {
        Self {
            name: node.name.to_string(),
            path: node.path.to_string(),
            icon: node.icon.to_string(),
            description: node.description.to_string(),
            children: node.children.iter().map(Into::into).collect(),
        }
    }
}

/// Taxonomy node without its children
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaxonomyNodeDto {
    pub name: String,
    pub path: String,
    pub icon: String,
    pub description: String,
    pub has_children: bool,
}

impl From<&TaxonomyNode> for TaxonomyNodeDto {
    fn from(node: &TaxonomyNode) -> Self {
        Self {
            name: node.name.to_string(),
            path: node.path.to_string(),
            icon: node.icon.to_string(),
            description: node.description.to_string(),
            has_children: !node.is_leaf(),
        }
    }
}

/// A resolved node and its direct children
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaxonomyNodeDetailDto {
    pub node: TaxonomyNodeDto,
    pub children: Vec<TaxonomyNodeDto>,
}

/// Navigation menu entry
///
/// Leaves carry a `path`. Groups carry `items`, starting with a
/// "View All {name}" link to the group's own page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(no_recursion)]
pub struct MenuItemDto {
    pub label: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuItemDto>,
}

impl From<MenuEntry> for MenuItemDto {
    fn from(entry: MenuEntry) -> Self {
        match entry {
            MenuEntry::Link { label, path, icon } => Self {
                label,
                icon: icon.to_string(),
                path: Some(path.to_string()),
                items: Vec::new(),
            },
            MenuEntry::Group { label, icon, items } => Self {
                label,
                icon: icon.to_string(),
                path: None,
                items: items.into_iter().map(Into::into).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BreadcrumbDto {
    pub name: String,
    pub path: String,
}

/// Landing page copy for a category path
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryPageDto {
    pub path: String,
    pub title: String,
    pub description: String,
    pub breadcrumbs: Vec<BreadcrumbDto>,
    /// `false` when the path is not in the taxonomy and the copy is generic
    pub found: bool,
}

impl CategoryPageDto {
    pub fn new(path: &str, page: CategoryPage) -> Self {
        Self {
            path: path.trim_matches('/').to_string(),
            title: page.title,
            description: page.description,
            breadcrumbs: page
                .trail
                .into_iter()
                .map(|node| BreadcrumbDto {
                    name: node.name.to_string(),
                    path: node.path.to_string(),
                })
                .collect(),
            found: page.found,
        }
    }
}
