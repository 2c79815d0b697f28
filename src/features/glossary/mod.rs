//! Static insurance glossary with search and category filtering.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/glossary?q=&category=` | No | Filtered terms |
//! | GET | `/api/glossary/categories` | No | Filter names, "All" first |

mod data;

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
