//! Fixed-table coverage calculator with shareable result links.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/calculator?type=` | No | Recommendation and share link |
//! | GET | `/api/calculator/types` | No | Known types |
//! | POST | `/api/calculator/parse` | No | Decode a share link |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CalculatorService;
