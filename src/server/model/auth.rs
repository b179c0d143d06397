//! Authenticated caller identity and token claims.

use entity::user::UserRole;
use serde::{Deserialize, Serialize};

/// Caller identity extracted from a verified access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub role: UserRole,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// JWT claims carried by every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub role: UserRole,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            role: claims.role,
        }
    }
}

/// Signed access token returned by a successful login.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_in: i64,
}

impl AccessToken {
    pub fn into_dto(self) -> crate::model::user::TokenDto {
        crate::model::user::TokenDto {
            access_token: self.token,
            token_type: "Bearer".to_string(),
            expires_in: self.expires_in,
        }
    }
}
