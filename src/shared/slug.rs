use crate::core::error::{AppError, Result};

/// Lowercase hyphenated slug of a human-readable name
///
/// Runs of characters outside `[a-z0-9]` (after lowercasing) collapse to one
/// hyphen; leading and trailing hyphens are dropped.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(c);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    out
}

/// Slug for a new record, rejecting names with no usable characters
pub fn slug_for(field: &str, value: &str) -> Result<String> {
    let slug = slugify(value);
    if slug.is_empty() {
        return Err(AppError::Validation(format!(
            "{} must contain at least one letter or digit",
            field
        )));
    }
    Ok(slug)
}
