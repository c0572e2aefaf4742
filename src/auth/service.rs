use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::token::TokenConfig;
use super::types::LoginResponse;
use crate::shared::AppError;
use crate::user::repository::UserRepository;

/// Service for the login flow: resolve a user by name, then mint a token
pub struct AuthService {
    repository: Arc<dyn UserRepository + Send + Sync>,
    token_config: TokenConfig,
}

impl AuthService {
    pub fn new(
        repository: Arc<dyn UserRepository + Send + Sync>,
        token_config: TokenConfig,
    ) -> Self {
        Self {
            repository,
            token_config,
        }
    }

    /// Authenticates by name and issues an access token.
    ///
    /// Name-only authentication: there is no credential check beyond the
    /// name existing in the store. This is fine for a demo and nothing
    /// else; a real deployment must verify a password or equivalent
    /// secret before issuing tokens.
    #[instrument(skip(self))]
    pub async fn login(&self, name: &str) -> Result<LoginResponse, AppError> {
        let user = self.repository.find_by_name(name).await?.ok_or_else(|| {
            warn!(name = %name, "Login attempt with unknown name");
            AppError::Unauthorized(format!("login with unknown name {name:?}"))
        })?;

        let token = self.token_config.issue(user.id)?;

        info!(user_id = user.id, "Login succeeded, token issued");
        Ok(LoginResponse { token })
    }
}
