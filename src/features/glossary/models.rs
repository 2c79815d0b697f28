use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::search::Searchable;

/// Closed set of glossary categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum GlossaryCategory {
    General,
    Auto,
    Home,
    Health,
    Life,
    Business,
}

impl GlossaryCategory {
    pub const ALL: [GlossaryCategory; 6] = [
        GlossaryCategory::General,
        GlossaryCategory::Auto,
        GlossaryCategory::Home,
        GlossaryCategory::Health,
        GlossaryCategory::Life,
        GlossaryCategory::Business,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GlossaryCategory::General => "General",
            GlossaryCategory::Auto => "Auto",
            GlossaryCategory::Home => "Home",
            GlossaryCategory::Health => "Health",
            GlossaryCategory::Life => "Life",
            GlossaryCategory::Business => "Business",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryItem {
    pub term: &'static str,
    pub definition: &'static str,
    pub category: GlossaryCategory,
}

impl Searchable for GlossaryItem {
    fn category_aliases(&self) -> Vec<&str> {
        vec![self.category.name()]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.term, self.definition]
    }
}
