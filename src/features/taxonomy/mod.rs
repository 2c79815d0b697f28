//! Static three-level category taxonomy used for navigation.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/taxonomy` | No | Full tree |
//! | GET | `/api/taxonomy/menu` | No | Rendered navigation menu |
//! | GET | `/api/taxonomy/page/{*path}` | No | Landing page title and description |
//! | GET | `/api/taxonomy/nodes/{*path}` | No | Node and its children |

mod data;

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod tree;

pub use tree::validate;
