use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Session user resolved from a validated access token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub roles: Vec<String>,
    /// Whether the token carries the configured admin role
    pub is_admin: bool,
}

impl AuthenticatedUser {
    pub fn from_claims(
        sub: String,
        email: Option<String>,
        name: Option<String>,
        roles: Vec<String>,
        admin_role: &str,
    ) -> Self {
        let is_admin = roles.iter().any(|r| r == admin_role);
        Self {
            sub,
            email,
            name,
            roles,
            is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_flag_follows_configured_role() {
        let user = AuthenticatedUser::from_claims(
            "u1".to_string(),
            None,
            None,
            vec!["editor".to_string(), "content_admin".to_string()],
            "content_admin",
        );
        assert!(user.is_admin);

        let user = AuthenticatedUser::from_claims(
            "u2".to_string(),
            None,
            None,
            vec!["editor".to_string()],
            "content_admin",
        );
        assert!(!user.is_admin);
    }
}
