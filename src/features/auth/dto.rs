use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::model::AuthenticatedUser;

/// DTO for /api/admin/me response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeResponseDto {
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub roles: Vec<String>,
}

impl From<AuthenticatedUser> for MeResponseDto {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            sub: user.sub,
            email: user.email,
            name: user.name,
            roles: user.roles,
        }
    }
}
