//! Persisted post categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | Categories with post counts |
//! | GET | `/api/categories/{slug}` | No | Single category |
//! | GET | `/api/admin/categories` | Admin | Back-office list |
//! | POST | `/api/admin/categories` | Admin | Create |
//! | GET/PUT/DELETE | `/api/admin/categories/{id}` | Admin | Read, update, delete |
//! | GET | `/api/admin/categories/{id}/delete-check` | Admin | Whether delete is allowed |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{CategoryRepository, PgCategoryRepository};
pub use services::CategoryService;
