use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::shared::constants::EXCERPT_LENGTH;
use crate::shared::validation::{SPACE_BEFORE_PUNCT_REGEX, TAG_REGEX};

/// Post row joined with its category's name and slug
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category_id: i64,
    pub category_name: String,
    pub category_slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Stored excerpt, or one derived from the content
    pub fn effective_excerpt(&self) -> String {
        match self.excerpt.as_deref() {
            Some(excerpt) if !excerpt.trim().is_empty() => excerpt.to_string(),
            _ => derive_excerpt(&self.content),
        }
    }
}

/// Values for a new post row
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category_id: i64,
    pub featured_image: Option<String>,
}

/// Full replacement values for an existing row; the slug is not included
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category_id: i64,
    pub featured_image: Option<String>,
}

/// Plain-text excerpt of stored markup
///
/// Tags are stripped and whitespace collapsed. Text longer than
/// `EXCERPT_LENGTH` characters is cut at the last word boundary and
/// suffixed with an ellipsis.
pub fn derive_excerpt(content: &str) -> String {
    let text = TAG_REGEX.replace_all(content, " ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let text = SPACE_BEFORE_PUNCT_REGEX.replace_all(&text, "$1").into_owned();

    if text.chars().count() <= EXCERPT_LENGTH {
        return text;
    }

    let cut: String = text.chars().take(EXCERPT_LENGTH).collect();
    let cut = match cut.rfind(' ') {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Paragraph;
    use fake::Fake;

    #[test]
    fn test_short_content_is_kept_verbatim() {
        assert_eq!(
            derive_excerpt("<p>Deductibles <em>explained</em>.</p>"),
            "Deductibles explained."
        );
    }

    #[test]
    fn test_inline_markup_does_not_space_out_punctuation() {
        assert_eq!(
            derive_excerpt("<p>Compare <strong>Medicare</strong>, then decide.</p>"),
            "Compare Medicare, then decide."
        );
        assert_eq!(
            derive_excerpt("<p>Ask (<em>politely</em>) for a quote!</p>"),
            "Ask (politely) for a quote!"
        );
    }

    #[test]
    fn test_long_content_is_cut_on_word_boundary() {
        for _ in 0..20 {
            let paragraph: String = Paragraph(20..30).fake();
            let excerpt = derive_excerpt(&format!("<p>{}</p>", paragraph));
            assert!(excerpt.ends_with('…'));
            assert!(excerpt.chars().count() <= EXCERPT_LENGTH + 1);

            // Generated paragraphs may carry line breaks; excerpts never do
            let flat = paragraph.split_whitespace().collect::<Vec<_>>().join(" ");
            let body = excerpt.trim_end_matches('…');
            assert!(flat.starts_with(body));
            // Cut lands between words
            let next = flat[body.len()..].chars().next();
            assert_eq!(next, Some(' '));
        }
    }

    #[test]
    fn test_stored_excerpt_wins() {
        let post = Post {
            id: 1,
            title: "Gap Coverage".to_string(),
            slug: "gap-coverage".to_string(),
            content: "<p>Long body</p>".to_string(),
            excerpt: Some("Hand-written summary".to_string()),
            featured_image: None,
            category_id: 1,
            category_name: "Auto".to_string(),
            category_slug: "auto".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(post.effective_excerpt(), "Hand-written summary");

        let post = Post {
            excerpt: Some("   ".to_string()),
            ..post
        };
        assert_eq!(post.effective_excerpt(), "Long body");
    }
}
