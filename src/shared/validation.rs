use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for slugs: lowercase alphanumeric segments joined by single hyphens
    /// - Valid: "pet-insurance", "auto", "term-life-101"
    /// - Invalid: "-auto", "auto-", "pet--insurance", "Pet", "pet_insurance"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Markup tags, stripped when deriving plain-text excerpts
    pub static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();

    /// Whitespace left in front of closing punctuation once tags are gone
    pub static ref SPACE_BEFORE_PUNCT_REGEX: Regex = Regex::new(r"\s+([.,;:!?)])").unwrap();
}
