//! Object storage for uploaded assets
//!
//! Services depend on [`AssetStorage`]; the MinIO/S3 client is the production
//! implementation.

mod minio_client;

use async_trait::async_trait;

use crate::core::error::Result;

pub use minio_client::MinIOClient;

/// Upload side of the object store
#[async_trait]
pub trait AssetStorage: Send + Sync {
    /// Store `data` under `path` in the public area and return its public URL
    ///
    /// Failures are reported as `AppError::Upload`.
    async fn upload_public(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<String>;
}
