use super::model::AuthenticatedUser;
use crate::core::error::{AppError, Result};
use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use super::jwks::JwksClient;

/// Turns a bearer token into the session user
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser>;
}

pub struct JwtValidator {
    jwks_client: Arc<JwksClient>,
    issuer: String,
    audience: String,
    leeway: u64,
    admin_role: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    // Standard claims, validated by jsonwebtoken
    sub: String,
    #[serde(rename = "iss")]
    _iss: String,
    #[serde(rename = "aud")]
    _aud: AudienceClaim,
    #[serde(rename = "exp")]
    _exp: u64,

    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
}

/// Audience can be either a single string or an array of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum AudienceClaim {
    Single(String),
    Multiple(Vec<String>),
}

impl JwtValidator {
    pub fn new(
        jwks_client: Arc<JwksClient>,
        issuer: String,
        audience: String,
        leeway: Duration,
        admin_role: String,
    ) -> Self {
        Self {
            jwks_client,
            issuer,
            audience,
            leeway: leeway.as_secs(),
            admin_role,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtValidator {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only RS256 is allowed",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AppError::Auth("Missing kid in token header".to_string()))?;

        let decoding_key = self
            .jwks_client
            .get_key(&kid)
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let claims = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?
            .claims;

        Ok(AuthenticatedUser::from_claims(
            claims.sub,
            claims.email,
            claims.name,
            claims.roles,
            &self.admin_role,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> JwtValidator {
        JwtValidator::new(
            Arc::new(JwksClient::new(
                "https://id.example.invalid/oidc",
                Duration::from_secs(60),
            )),
            "https://id.example.invalid/oidc".to_string(),
            "coverguide-api".to_string(),
            Duration::from_secs(0),
            "admin".to_string(),
        )
    }

    #[tokio::test]
    async fn test_malformed_token_is_rejected_before_jwks_fetch() {
        let result = validator().verify("not-a-jwt").await;
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_hs256_token_is_rejected() {
        // {"alg":"HS256","typ":"JWT"}.{"sub":"x"}.sig
        let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJ4In0.c2ln";
        let result = validator().verify(token).await;
        match result {
            Err(AppError::Auth(msg)) => assert!(msg.contains("Unsupported algorithm")),
            other => panic!("expected auth error, got {:?}", other.map(|u| u.sub)),
        }
    }
}
