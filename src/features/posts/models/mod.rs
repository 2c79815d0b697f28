mod post;

pub use post::{derive_excerpt, NewPost, Post, PostChanges};
