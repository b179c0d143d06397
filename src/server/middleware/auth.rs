use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::user::UserRole;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::Principal,
    service::token::TokenService,
};

pub enum Permission {
    /// Caller must have the ADMIN role.
    Admin,
    /// Caller must have the PROJECT_MANAGER role.
    ProjectManager,
    /// Caller must be the user with this ID or an admin.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Authenticates the bearer token and checks every listed permission.
    ///
    /// Role checks use the token's claims only; the store is not consulted.
    /// An empty permission list only requires a valid token.
    ///
    /// # Returns
    /// - `Ok(Principal)` - Caller identity when all permissions are met
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Token malformed, forged or expired
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub fn require(&self, permissions: &[Permission]) -> Result<Principal, AppError> {
        let token = self.bearer_token()?;
        let principal = Principal::from(self.tokens.verify(token)?);

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !principal.is_admin() {
                        return Err(AuthError::AccessDenied(
                            principal.user_id,
                            "User attempted an admin-only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::ProjectManager => {
                    if principal.role != UserRole::ProjectManager {
                        return Err(AuthError::AccessDenied(
                            principal.user_id,
                            "User attempted a project manager action without the project manager role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(user_id) => {
                    if principal.user_id != *user_id && !principal.is_admin() {
                        return Err(AuthError::AccessDenied(
                            principal.user_id,
                            format!(
                                "User attempted to access user {} without being that user or an admin",
                                user_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(principal)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken);
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::InvalidToken("Authorization header is not ASCII".to_string()))?;

        match value.split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
                Ok(token.trim())
            }
            _ => Err(AuthError::InvalidToken(
                "Authorization header is not a bearer token".to_string(),
            )),
        }
    }
}
