use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::calculator::{dtos as calculator_dtos, handlers as calculator_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::glossary::{
    dtos as glossary_dtos, handlers as glossary_handlers, models as glossary_models,
};
use crate::features::posts::{dtos as posts_dtos, handlers as posts_handlers};
use crate::features::settings::{dtos as settings_dtos, handlers as settings_handlers};
use crate::features::taxonomy::{dtos as taxonomy_dtos, handlers as taxonomy_handlers};
use crate::shared::search::{AppliedFilters, SearchResults};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handler::get_me,
        // Taxonomy
        taxonomy_handlers::get_tree,
        taxonomy_handlers::get_menu,
        taxonomy_handlers::get_page,
        taxonomy_handlers::get_node,
        // Posts (public)
        posts_handlers::list_posts,
        posts_handlers::get_post,
        posts_handlers::list_category_posts,
        // Categories (public)
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Glossary
        glossary_handlers::search_glossary,
        glossary_handlers::list_glossary_categories,
        // Calculator
        calculator_handlers::calculate,
        calculator_handlers::list_types,
        calculator_handlers::parse_share_link,
        // Settings (public)
        settings_handlers::get_settings,
        // Admin
        dashboard_handlers::get_summary,
        posts_handlers::admin_list_posts,
        posts_handlers::admin_get_post,
        posts_handlers::create_post,
        posts_handlers::update_post,
        posts_handlers::delete_post,
        categories_handlers::admin_list_categories,
        categories_handlers::admin_get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::category_delete_check,
        categories_handlers::delete_category,
        settings_handlers::admin_get_settings,
        settings_handlers::update_settings,
    ),
    components(
        schemas(
            // Shared
            Meta,
            AppliedFilters,
            // Auth
            auth::dto::MeResponseDto,
            auth::model::AuthenticatedUser,
            ApiResponse<auth::dto::MeResponseDto>,
            // Taxonomy
            taxonomy_dtos::TaxonomyTreeDto,
            taxonomy_dtos::TaxonomyNodeDto,
            taxonomy_dtos::TaxonomyNodeDetailDto,
            taxonomy_dtos::MenuItemDto,
            taxonomy_dtos::BreadcrumbDto,
            taxonomy_dtos::CategoryPageDto,
            ApiResponse<Vec<taxonomy_dtos::TaxonomyTreeDto>>,
            ApiResponse<Vec<taxonomy_dtos::MenuItemDto>>,
            ApiResponse<taxonomy_dtos::CategoryPageDto>,
            ApiResponse<taxonomy_dtos::TaxonomyNodeDetailDto>,
            // Posts
            posts_dtos::PostCategoryDto,
            posts_dtos::PostSummaryDto,
            posts_dtos::PostResponseDto,
            posts_dtos::CategoryPostsDto,
            posts_dtos::PostFormDto,
            SearchResults<posts_dtos::PostSummaryDto>,
            ApiResponse<SearchResults<posts_dtos::PostSummaryDto>>,
            ApiResponse<posts_dtos::PostResponseDto>,
            ApiResponse<Vec<posts_dtos::PostResponseDto>>,
            ApiResponse<posts_dtos::CategoryPostsDto>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::DeleteCheckDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<categories_dtos::DeleteCheckDto>,
            // Glossary
            glossary_models::GlossaryCategory,
            glossary_dtos::GlossaryItemDto,
            SearchResults<glossary_dtos::GlossaryItemDto>,
            ApiResponse<SearchResults<glossary_dtos::GlossaryItemDto>>,
            ApiResponse<Vec<String>>,
            // Calculator
            calculator_dtos::CalculatorResultDto,
            calculator_dtos::ParseShareLinkDto,
            calculator_dtos::ShareStateDto,
            calculator_dtos::InsuranceTypeDto,
            ApiResponse<calculator_dtos::CalculatorResultDto>,
            ApiResponse<calculator_dtos::ShareStateDto>,
            ApiResponse<Vec<calculator_dtos::InsuranceTypeDto>>,
            // Settings
            settings_dtos::SiteSettingsDto,
            settings_dtos::UpdateSettingsDto,
            ApiResponse<settings_dtos::SiteSettingsDto>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
        )
    ),
    tags(
        (name = "taxonomy", description = "Static category tree and navigation menu"),
        (name = "posts", description = "Published insurance guides"),
        (name = "categories", description = "Post categories (public)"),
        (name = "glossary", description = "Insurance terms"),
        (name = "calculator", description = "Coverage calculator and share links"),
        (name = "settings", description = "Site-wide settings"),
        (name = "admin", description = "Back office (admin role required)"),
        (name = "auth", description = "Current session"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "CoverGuide API",
        version = "0.1.0",
        description = "API documentation for CoverGuide",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
