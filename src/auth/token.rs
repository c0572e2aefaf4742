use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};

use super::types::AccessClaims;
use crate::shared::AppError;

/// Configuration for JWT token operations.
///
/// Tokens are stateless: validity is determined purely by signature and
/// expiry at verification time, so nothing is stored server-side. The
/// tradeoff is that a token cannot be revoked before its natural expiry;
/// the short 1-hour lifetime bounds that exposure.
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    pub expiration_hours: i64,
}

impl TokenConfig {
    /// Creates a config with an explicit secret. Tokens expire 1 hour
    /// after issuance.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours: 1,
        }
    }

    /// Reads the signing secret from the `JWT_SECRET` environment variable.
    ///
    /// Panics when the variable is unset: falling back to a built-in
    /// secret would silently issue tokens no other deployment can verify,
    /// so startup must fail instead.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        Self::new(secret)
    }

    /// Issues a signed token for the given subject id
    #[instrument(skip(self))]
    pub fn issue(&self, subject_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: subject_id,
            iat: now.timestamp() as usize,
            exp: (now + Duration::hours(self.expiration_hours)).timestamp() as usize,
        };

        debug!(
            subject_id,
            exp_timestamp = claims.exp,
            "Issuing access token"
        );

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| {
            debug!(error = %e, "Failed to encode access token");
            AppError::Internal
        })
    }

    /// Verifies a token and returns its claims if valid.
    ///
    /// Malformed, badly signed and expired tokens all collapse into the
    /// same `Unauthorized` error; the concrete cause is logged here and
    /// never reaches the client.
    #[instrument(skip(self, token))]
    pub fn verify(&self, token: &str) -> Result<AccessClaims, AppError> {
        decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| {
            debug!(
                subject_id = data.claims.sub,
                exp = data.claims.exp,
                "Access token verified"
            );
            data.claims
        })
        .map_err(|e| {
            debug!(error = %e, "Access token rejected");
            AppError::Unauthorized(format!("token verification failed: {e}"))
        })
    }
}
