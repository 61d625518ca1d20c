//! Session token verification.
//!
//! Splits signature verification (here) from deterministic claims validation
//! ([`crate::claims::validate_claims`]) so the latter stays clock-injectable
//! and trivially testable.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::claims::{validate_claims, SessionClaims, TokenValidationError};

#[derive(Debug, Error)]
pub enum SessionError {
    /// Token could not be decoded or its signature did not verify.
    #[error("malformed or tampered session token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token decoded fine but its claims are not currently valid.
    #[error(transparent)]
    InvalidClaims(#[from] TokenValidationError),
}

/// Verifies a raw session token and yields its claims.
///
/// Object-safe so HTTP middleware can hold `Arc<dyn SessionValidator>` and
/// tests can swap in deterministic fakes.
pub trait SessionValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, SessionError>;
}

/// HMAC-SHA256 session validator backed by a shared secret.
pub struct Hs256SessionValidator {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256SessionValidator {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Claims carry RFC 3339 timestamps, not the numeric `exp`/`iat`
        // registered claims, so the library's time checks must stay off and
        // `validate_claims` does that work instead.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl SessionValidator for Hs256SessionValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, SessionError> {
        let decoded = jsonwebtoken::decode::<SessionClaims>(token, &self.key, &self.validation)
            .map_err(SessionError::InvalidToken)?;

        validate_claims(&decoded.claims, now)?;
        Ok(decoded.claims)
    }
}
