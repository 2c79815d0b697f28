//! Blog posts: the public catalog and post administration.
//!
//! The public site and the back office read and write the same `posts`
//! table.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{PgPostRepository, PostRepository};
pub use services::PostService;
