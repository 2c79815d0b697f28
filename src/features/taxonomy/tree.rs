use std::collections::HashSet;

use crate::core::error::{AppError, Result};

use super::data::TAXONOMY;

/// Deepest allowed level: Category → Subcategory → Third-level category
pub const MAX_DEPTH: usize = 3;

/// Generic landing page copy for paths outside the tree
const FALLBACK_TITLE: &str = "Insurance Guides";
const FALLBACK_DESCRIPTION: &str =
    "Browse our plain-language guides to choosing and using insurance.";

/// A node of the static taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyNode {
    pub name: &'static str,
    /// Routing key, unique across the whole tree
    pub path: &'static str,
    /// Presentation-only icon name
    pub icon: &'static str,
    pub description: &'static str,
    pub children: &'static [TaxonomyNode],
}

impl TaxonomyNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// One entry of the rendered navigation menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Plain link
    Link {
        label: String,
        path: &'static str,
        icon: &'static str,
    },
    /// Internal node: a "View All" link followed by its children
    Group {
        label: String,
        icon: &'static str,
        items: Vec<MenuEntry>,
    },
}

/// Landing page copy for a taxonomy path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPage {
    pub title: String,
    pub description: String,
    /// Ancestors from the root down to the node itself
    pub trail: Vec<&'static TaxonomyNode>,
    pub found: bool,
}

/// Top-level categories in declared order
pub fn roots() -> &'static [TaxonomyNode] {
    TAXONOMY
}

/// Check the depth bound and path uniqueness of the built-in tree
pub fn validate() -> Result<()> {
    validate_tree(TAXONOMY)
}

pub fn validate_tree(nodes: &[TaxonomyNode]) -> Result<()> {
    let mut seen = HashSet::new();
    validate_level(nodes, 1, &mut seen)
}

fn validate_level<'a>(
    nodes: &'a [TaxonomyNode],
    depth: usize,
    seen: &mut HashSet<&'a str>,
) -> Result<()> {
    for node in nodes {
        if depth > MAX_DEPTH {
            return Err(AppError::Internal(format!(
                "Taxonomy node '{}' is at depth {} (max {})",
                node.path, depth, MAX_DEPTH
            )));
        }
        if !seen.insert(node.path) {
            return Err(AppError::Internal(format!(
                "Taxonomy path '{}' is not unique",
                node.path
            )));
        }
        validate_level(node.children, depth + 1, seen)?;
    }
    Ok(())
}

/// Lookup ignoring letter case and a leading or trailing `/`
pub fn resolve(path: &str) -> Option<&'static TaxonomyNode> {
    let wanted = normalize(path);
    if wanted.is_empty() {
        return None;
    }
    trail_to(TAXONOMY, &wanted).and_then(|trail| trail.last().copied())
}

/// Children in declared order
pub fn children(node: &'static TaxonomyNode) -> &'static [TaxonomyNode] {
    node.children
}

/// Navigation menu for the whole tree
pub fn menu() -> Vec<MenuEntry> {
    render_menu(TAXONOMY)
}

pub fn render_menu(nodes: &'static [TaxonomyNode]) -> Vec<MenuEntry> {
    nodes.iter().map(render_node).collect()
}

fn render_node(node: &'static TaxonomyNode) -> MenuEntry {
    if node.is_leaf() {
        return MenuEntry::Link {
            label: node.name.to_string(),
            path: node.path,
            icon: node.icon,
        };
    }

    let mut items = Vec::with_capacity(node.children.len() + 1);
    items.push(MenuEntry::Link {
        label: format!("View All {}", node.name),
        path: node.path,
        icon: node.icon,
    });
    items.extend(node.children.iter().map(render_node));

    MenuEntry::Group {
        label: node.name.to_string(),
        icon: node.icon,
        items,
    }
}

/// Title and description for a category landing page
///
/// Unknown paths get generic copy with `found = false`.
pub fn describe(path: &str) -> CategoryPage {
    let wanted = normalize(path);

    match trail_to(TAXONOMY, &wanted) {
        Some(trail) => {
            let node = trail[trail.len() - 1];
            let root = trail[0];
            let title = if trail.len() == 1 {
                format!("{} Insurance", root.name)
            } else {
                format!("{} | {} Insurance", node.name, root.name)
            };
            CategoryPage {
                title,
                description: node.description.to_string(),
                trail,
                found: true,
            }
        }
        None => CategoryPage {
            title: fallback_title(&wanted),
            description: FALLBACK_DESCRIPTION.to_string(),
            trail: Vec::new(),
            found: false,
        },
    }
}

fn normalize(path: &str) -> String {
    path.trim().trim_matches('/').to_lowercase()
}

/// Path from a root to the node at `path`
fn trail_to(nodes: &'static [TaxonomyNode], path: &str) -> Option<Vec<&'static TaxonomyNode>> {
    for node in nodes {
        if node.path == path {
            return Some(vec![node]);
        }
        if let Some(mut trail) = trail_to(node.children, path) {
            trail.insert(0, node);
            return Some(trail);
        }
    }
    None
}

/// "pet-insurance/cats" → "Cats"
fn fallback_title(path: &str) -> String {
    let last = path.rsplit('/').next().unwrap_or("");
    let words: Vec<String> = last
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        words.join(" ")
    }
}
