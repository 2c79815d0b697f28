/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Category filter value that matches every item
pub const ALL_CATEGORIES: &str = "All";

/// Length of excerpts derived from post content
pub const EXCERPT_LENGTH: usize = 160;

/// Path of the tools page on the public site
pub const TOOLS_PATH: &str = "/tools";
