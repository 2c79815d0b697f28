use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::models::{GlossaryCategory, GlossaryItem};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GlossaryItemDto {
    pub term: String,
    pub definition: String,
    pub category: GlossaryCategory,
}

impl From<&GlossaryItem> for GlossaryItemDto {
    fn from(item: &GlossaryItem) -> Self {
        Self {
            term: item.term.to_string(),
            definition: item.definition.to_string(),
            category: item.category,
        }
    }
}
