//! MinIO/S3-compatible storage client
//!
//! Post images go under the public prefix, which gets an anonymous-read
//! bucket policy so the returned URLs work without signing.
//!
//! Uses rust-s3 crate for lightweight S3 operations.

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{Client, Url};
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::{debug, error, info, warn};

use super::AssetStorage;
use crate::core::config::MinIOConfig;
use crate::core::error::{AppError, Result};

type HmacSha256 = Hmac<Sha256>;

/// MinIO/S3-compatible storage client
pub struct MinIOClient {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    endpoint: String,
    public_endpoint: String,
    public_prefix: String,
    /// Access key for AWS Signature v4 signing
    access_key: String,
    /// Secret key for AWS Signature v4 signing
    secret_key: String,
    /// Region name for AWS Signature v4 signing
    region_name: String,
    /// HTTP client for bucket policy operations
    http_client: Client,
}

impl MinIOClient {
    /// Create a new MinIO client from configuration
    ///
    /// This will:
    /// 1. Create the bucket if it doesn't exist
    /// 2. Set public read policy for the public prefix
    pub async fn new(config: MinIOConfig) -> Result<Self> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create MinIO credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create MinIO bucket: {}", e)))?;

        // Path-style URLs for MinIO (http://endpoint/bucket instead of http://bucket.endpoint)
        bucket.set_path_style();

        let http_client = Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let client = Self {
            bucket,
            region,
            credentials,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            public_endpoint: config.public_endpoint.trim_end_matches('/').to_string(),
            public_prefix: config.public_prefix,
            access_key: config.access_key,
            secret_key: config.secret_key,
            region_name: config.region,
            http_client,
        };

        client.ensure_bucket_exists().await?;
        client.set_public_read_policy().await?;

        info!(
            "MinIO client initialized for endpoint: {}, bucket: {}, public_prefix: {}",
            client.endpoint,
            client.bucket.name(),
            client.public_prefix
        );

        Ok(client)
    }

    /// Ensure the bucket exists, create if not
    pub async fn ensure_bucket_exists(&self) -> Result<()> {
        match self.create_bucket().await {
            Ok(_) => {
                info!("Bucket '{}' created successfully", self.bucket.name());
                Ok(())
            }
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                } else {
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                }
                Ok(())
            }
        }
    }

    async fn create_bucket(&self) -> Result<()> {
        Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await
        .map_err(|e| {
            AppError::Internal(format!(
                "Failed to create bucket '{}': {}",
                self.bucket.name(),
                e
            ))
        })?;

        Ok(())
    }

    /// Allow anonymous `s3:GetObject` on `{public_prefix}/*`
    async fn set_public_read_policy(&self) -> Result<()> {
        let bucket_name = self.bucket.name();
        let policy = public_read_policy(&bucket_name, &self.public_prefix).to_string();

        match self
            .put_bucket_policy_with_sigv4(&bucket_name, &policy)
            .await
        {
            Ok(_) => {
                info!(
                    "Set public read policy for {}/{}/*",
                    bucket_name, self.public_prefix
                );
            }
            Err(e) => {
                // Startup continues; the policy can be set by hand
                warn!(
                    "Failed to set bucket policy for '{}': {}. \
                    You may need to set the policy manually using: \
                    mc anonymous set download minio/{}/{}",
                    bucket_name, e, bucket_name, self.public_prefix
                );
            }
        }
        Ok(())
    }

    /// Put bucket policy using AWS Signature v4
    async fn put_bucket_policy_with_sigv4(&self, bucket_name: &str, policy: &str) -> Result<()> {
        let now = Utc::now();
        let date_stamp = now.format("%Y%m%d").to_string();
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();

        let endpoint_url = Url::parse(&self.endpoint)
            .map_err(|e| AppError::Internal(format!("Invalid endpoint URL: {}", e)))?;
        let host = endpoint_url
            .host_str()
            .ok_or_else(|| AppError::Internal("Endpoint URL has no host".to_string()))?;
        let host_header = match endpoint_url.port() {
            Some(p) => format!("{}:{}", host, p),
            None => host.to_string(),
        };

        let url = format!("{}/{}?policy", self.endpoint, bucket_name);
        let payload_hash = hex::encode(Sha256::digest(policy.as_bytes()));

        let canonical_uri = format!("/{}", bucket_name);
        let canonical_querystring = "policy=";
        let canonical_headers = format!(
            "host:{}\nx-amz-content-sha256:{}\nx-amz-date:{}\n",
            host_header, payload_hash, amz_date
        );
        let signed_headers = "host;x-amz-content-sha256;x-amz-date";

        let canonical_request = format!(
            "PUT\n{}\n{}\n{}\n{}\n{}",
            canonical_uri, canonical_querystring, canonical_headers, signed_headers, payload_hash
        );

        let algorithm = "AWS4-HMAC-SHA256";
        let credential_scope = format!("{}/{}/s3/aws4_request", date_stamp, self.region_name);
        let canonical_request_hash = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            algorithm, amz_date, credential_scope, canonical_request_hash
        );

        let signature =
            sigv4_signature(&self.secret_key, &self.region_name, &date_stamp, &string_to_sign)?;

        let authorization_header = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            algorithm, self.access_key, credential_scope, signed_headers, signature
        );

        let response = self
            .http_client
            .put(&url)
            .header("Host", &host_header)
            .header("x-amz-date", &amz_date)
            .header("x-amz-content-sha256", &payload_hash)
            .header("Authorization", &authorization_header)
            .header("Content-Type", "application/json")
            .body(policy.to_string())
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send policy request: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::Internal(format!(
                "Failed to set bucket policy: {} - {}",
                status, body
            )))
        }
    }

    /// Full object key under the public prefix
    pub fn public_key(&self, path: &str) -> String {
        format!("{}/{}", self.public_prefix, path.trim_start_matches('/'))
    }

    /// Direct URL of a public object, using the public endpoint
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }

    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }
}

#[async_trait]
impl AssetStorage for MinIOClient {
    async fn upload_public(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<String> {
        let key = self.public_key(path);

        let response = self
            .bucket
            .put_object_with_content_type(&key, &data, content_type)
            .await
            .map_err(|e| AppError::Upload(format!("Failed to upload '{}': {}", key, e)))?;
        ensure_upload_succeeded(&key, response.status_code(), response.as_slice())?;

        debug!("Uploaded '{}' to bucket '{}'", key, self.bucket.name());
        Ok(self.public_url(&key))
    }
}

/// rust-s3 reports non-2xx replies as `Ok`; treat them as failed uploads
fn ensure_upload_succeeded(key: &str, status: u16, body: &[u8]) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let body = String::from_utf8_lossy(body);
    error!("Upload of '{}' rejected with status {}: {}", key, status, body);
    Err(AppError::Upload(format!(
        "Failed to upload '{}': storage responded with status {}",
        key, status
    )))
}

fn public_read_policy(bucket_name: &str, public_prefix: &str) -> serde_json::Value {
    json!({
        "Version": "2012-10-17",
        "Statement": [
            {
                "Effect": "Allow",
                "Principal": {"AWS": "*"},
                "Action": ["s3:GetObject"],
                "Resource": [format!("arn:aws:s3:::{bucket_name}/{public_prefix}/*")]
            }
        ]
    })
}

/// AWS Signature v4 over `string_to_sign`
fn sigv4_signature(
    secret_key: &str,
    region: &str,
    date_stamp: &str,
    string_to_sign: &str,
) -> Result<String> {
    let k_date = hmac_sha256(
        format!("AWS4{}", secret_key).as_bytes(),
        date_stamp.as_bytes(),
    )?;
    let k_region = hmac_sha256(&k_date, region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, b"s3")?;
    let k_signing = hmac_sha256(&k_service, b"aws4_request")?;

    let signature = hmac_sha256(&k_signing, string_to_sign.as_bytes())?;
    Ok(hex::encode(signature))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| AppError::Internal(format!("HMAC key error: {}", e)))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}
