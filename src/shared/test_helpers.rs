use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use axum::{extract::Request, middleware::Next, Router};
use chrono::{Duration, Utc};

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::TokenVerifier;
use crate::features::categories::models::{Category, CategoryWithCount, NewCategory};
use crate::features::categories::CategoryRepository;
use crate::features::posts::models::{NewPost, Post, PostChanges};
use crate::features::posts::PostRepository;
use crate::features::settings::models::Setting;
use crate::features::settings::SettingsRepository;
use crate::modules::storage::AssetStorage;
use crate::shared::slug::slugify;

pub fn admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "admin-sub".to_string(),
        email: Some("admin@example.com".to_string()),
        name: Some("Site Admin".to_string()),
        roles: vec!["admin".to_string()],
        is_admin: true,
    }
}

pub fn editor_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "editor-sub".to_string(),
        email: None,
        name: None,
        roles: vec!["editor".to_string()],
        is_admin: false,
    }
}

/// Wrap `router` so every request carries `user`
pub fn with_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}

pub fn with_admin_auth(router: Router) -> Router {
    with_user(router, admin_user())
}

/// Accepts exactly one token
pub struct StaticTokenVerifier {
    token: String,
    user: AuthenticatedUser,
}

impl StaticTokenVerifier {
    pub fn new(token: &str, user: AuthenticatedUser) -> Self {
        Self {
            token: token.to_string(),
            user,
        }
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser> {
        if token == self.token {
            Ok(self.user.clone())
        } else {
            Err(AppError::Unauthorized("Invalid token".to_string()))
        }
    }
}

#[derive(Default)]
struct ContentState {
    next_id: i64,
    categories: BTreeMap<i64, Category>,
    posts: BTreeMap<i64, PostRow>,
    settings: BTreeMap<String, Setting>,
}

#[derive(Clone)]
struct PostRow {
    id: i64,
    post: NewPost,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl ContentState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn post_count(&self, category_id: i64) -> i64 {
        self.posts
            .values()
            .filter(|p| p.post.category_id == category_id)
            .count() as i64
    }

    fn with_count(&self, category: &Category) -> CategoryWithCount {
        CategoryWithCount {
            category: category.clone(),
            post_count: self.post_count(category.id),
        }
    }

    fn joined(&self, row: &PostRow) -> Post {
        let category = self.categories.get(&row.post.category_id);
        Post {
            id: row.id,
            title: row.post.title.clone(),
            slug: row.post.slug.clone(),
            content: row.post.content.clone(),
            excerpt: row.post.excerpt.clone(),
            featured_image: row.post.featured_image.clone(),
            category_id: row.post.category_id,
            category_name: category.map(|c| c.name.clone()).unwrap_or_default(),
            category_slug: category.map(|c| c.slug.clone()).unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn newest_first(&self, keep: impl Fn(&PostRow) -> bool) -> Vec<Post> {
        let mut rows: Vec<&PostRow> = self.posts.values().filter(|r| keep(r)).collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.into_iter().map(|r| self.joined(r)).collect()
    }
}

/// In-memory stand-in for the category, post and settings tables
///
/// Enforces unique slugs and the posts-to-categories foreign key the way
/// the Postgres schema does.
#[derive(Default)]
pub struct InMemoryContentStore {
    state: Mutex<ContentState>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_category(&self, name: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let now = Utc::now();
        state.categories.insert(
            id,
            Category {
                id,
                name: name.to_string(),
                slug: slugify(name),
                description: None,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    /// Insert a post; later seeds are newer
    pub fn seed_post(&self, category_id: i64, title: &str, excerpt: Option<&str>) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let created_at = Utc::now() + Duration::seconds(id);
        state.posts.insert(
            id,
            PostRow {
                id,
                post: NewPost {
                    title: title.to_string(),
                    slug: slugify(title),
                    content: format!("<p>{}</p>", title),
                    excerpt: excerpt.map(str::to_string),
                    category_id,
                    featured_image: None,
                },
                created_at,
                updated_at: created_at,
            },
        );
        id
    }

    pub fn post_count(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }

    pub fn setting_count(&self) -> usize {
        self.state.lock().unwrap().settings.len()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryContentStore {
    async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>> {
        let state = self.state.lock().unwrap();
        let mut categories: Vec<CategoryWithCount> =
            state.categories.values().map(|c| state.with_count(c)).collect();
        categories.sort_by(|a, b| a.category.name.cmp(&b.category.name));
        Ok(categories)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CategoryWithCount>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.get(&id).map(|c| state.with_count(c)))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<CategoryWithCount>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .values()
            .find(|c| c.slug == slug)
            .map(|c| state.with_count(c)))
    }

    async fn insert(&self, category: NewCategory) -> Result<Category> {
        let mut state = self.state.lock().unwrap();
        if state.categories.values().any(|c| c.slug == category.slug) {
            return Err(AppError::Conflict(
                "A category with this slug already exists".to_string(),
            ));
        }
        let id = state.next_id();
        let now = Utc::now();
        let row = Category {
            id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: now,
            updated_at: now,
        };
        state.categories.insert(id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Category>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.categories.get_mut(&id).map(|c| {
            c.name = name.to_string();
            c.description = description.map(str::to_string);
            c.updated_at = Utc::now();
            c.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        if state.post_count(id) > 0 {
            return Err(AppError::ReferentialIntegrity(
                "The category is referenced by other records".to_string(),
            ));
        }
        Ok(state.categories.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.state.lock().unwrap().categories.len() as i64)
    }
}

#[async_trait]
impl PostRepository for InMemoryContentStore {
    async fn list_all(&self) -> Result<Vec<Post>> {
        Ok(self.state.lock().unwrap().newest_first(|_| true))
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Post>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .newest_first(|r| r.post.category_id == category_id))
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<Post>, i64)> {
        let all = self.state.lock().unwrap().newest_first(|_| true);
        let total = all.len() as i64;
        let page = all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.get(&id).map(|r| state.joined(r)))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .values()
            .find(|r| r.post.slug == slug)
            .map(|r| state.joined(r)))
    }

    async fn insert(&self, post: NewPost) -> Result<Post> {
        let mut state = self.state.lock().unwrap();
        if state.posts.values().any(|r| r.post.slug == post.slug) {
            return Err(AppError::Conflict(
                "A post with this slug already exists".to_string(),
            ));
        }
        if !state.categories.contains_key(&post.category_id) {
            return Err(AppError::Validation(format!(
                "Category {} does not exist",
                post.category_id
            )));
        }
        let id = state.next_id();
        let now = Utc::now() + Duration::seconds(id);
        let row = PostRow {
            id,
            post,
            created_at: now,
            updated_at: now,
        };
        state.posts.insert(id, row.clone());
        Ok(state.joined(&row))
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>> {
        let mut state = self.state.lock().unwrap();
        if !state.categories.contains_key(&changes.category_id) {
            return Err(AppError::Validation(format!(
                "Category {} does not exist",
                changes.category_id
            )));
        }
        let Some(row) = state.posts.get_mut(&id) else {
            return Ok(None);
        };
        row.post.title = changes.title;
        row.post.content = changes.content;
        row.post.excerpt = changes.excerpt;
        row.post.category_id = changes.category_id;
        row.post.featured_image = changes.featured_image;
        row.updated_at = Utc::now();
        let row = row.clone();
        Ok(Some(state.joined(&row)))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.state.lock().unwrap().posts.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.state.lock().unwrap().posts.len() as i64)
    }

    async fn count_without_image(&self) -> Result<i64> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .posts
            .values()
            .filter(|r| r.post.featured_image.is_none())
            .count() as i64)
    }
}

#[async_trait]
impl SettingsRepository for InMemoryContentStore {
    async fn list(&self) -> Result<Vec<Setting>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .settings
            .values()
            .cloned()
            .collect())
    }

    async fn upsert(&self, entries: &[(&str, String)]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        for (key, value) in entries {
            state.settings.insert(
                key.to_string(),
                Setting {
                    key: key.to_string(),
                    value: value.clone(),
                    updated_at: Utc::now(),
                },
            );
        }
        Ok(())
    }
}

/// Storage that accepts every upload and records its path
#[derive(Default)]
pub struct InMemoryAssetStorage {
    paths: Mutex<Vec<String>>,
}

impl InMemoryAssetStorage {
    pub fn uploaded_paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetStorage for InMemoryAssetStorage {
    async fn upload_public(&self, path: &str, _data: Vec<u8>, _content_type: &str) -> Result<String> {
        self.paths.lock().unwrap().push(path.to_string());
        Ok(format!("http://localhost:9000/coverguide-uploads/public/{}", path))
    }
}

/// Storage whose uploads always fail
#[derive(Default)]
pub struct FailingAssetStorage {
    called: AtomicBool,
}

impl FailingAssetStorage {
    pub fn was_called(&self) -> bool {
        self.called.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetStorage for FailingAssetStorage {
    async fn upload_public(&self, path: &str, _data: Vec<u8>, _content_type: &str) -> Result<String> {
        self.called.store(true, Ordering::SeqCst);
        Err(AppError::Upload(format!("storage unavailable for '{}'", path)))
    }
}
