//! Substring search with category filtering.
//!
//! Shared by the post catalog and the glossary. Every request re-runs the
//! filter over an already-resident list; results keep the input order.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::ALL_CATEGORIES;

/// Something that can be matched by [`filter`]
pub trait Searchable {
    /// Names the item's category answers to (display name, slug, ...)
    fn category_aliases(&self) -> Vec<&str>;

    /// Text fields searched by the query
    fn search_fields(&self) -> Vec<&str>;
}

/// Category part of a filter request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Missing, empty, `"All"` and `"all"` all mean "no category restriction"
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some("All") | Some("all") => CategoryFilter::All,
            Some(name) => CategoryFilter::Named(name.to_string()),
        }
    }

    pub fn matches(&self, aliases: &[&str]) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => {
                let wanted = name.to_lowercase();
                aliases.iter().any(|alias| alias.to_lowercase() == wanted)
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

/// Query-string form of a filter request (`?q=&category=`)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive substring to look for
    #[serde(default)]
    pub q: Option<String>,
    /// Category name or slug; "All" for every category
    #[serde(default)]
    pub category: Option<String>,
}

impl SearchQuery {
    pub fn text(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::parse(self.category.as_deref())
    }
}

/// Filter values echoed back to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AppliedFilters {
    pub query: String,
    pub category: String,
}

impl AppliedFilters {
    pub fn defaults() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

/// Filtered list plus the filters that produced it
///
/// `reset` is only set when nothing matched, so clients can offer a
/// one-click return to the default filters.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResults<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub filters: AppliedFilters,
    pub reset: Option<AppliedFilters>,
}

impl<T> SearchResults<T> {
    pub fn new(items: Vec<T>, query: &str, category: &CategoryFilter) -> Self {
        let reset = items.is_empty().then(AppliedFilters::defaults);
        Self {
            total: items.len(),
            items,
            filters: AppliedFilters {
                query: query.to_string(),
                category: category.as_str().to_string(),
            },
            reset,
        }
    }
}

/// True when `item` passes both the category and the text predicate
pub fn matches<T: Searchable>(item: &T, query: &str, category: &CategoryFilter) -> bool {
    if !category.matches(&item.category_aliases()) {
        return false;
    }
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Items matching `query` and `category`, in their original order
pub fn filter<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches(*item, query, category))
        .collect()
}
