use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopfront_core::RetailerId;

/// Session claims model (transport-agnostic).
///
/// This is the minimal set of claims Shopfront expects once a session token
/// has been decoded/verified by whatever transport/security layer is in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / retailer identifier.
    pub sub: RetailerId,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding is
/// handled by [`crate::session::SessionValidator`] implementations.
pub fn validate_claims(
    claims: &SessionClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims(issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> SessionClaims {
        SessionClaims {
            sub: RetailerId::new(),
            issued_at,
            expires_at,
        }
    }

    #[test]
    fn accepts_claims_within_window() {
        let now = Utc::now();
        let c = claims(now - Duration::minutes(5), now + Duration::minutes(5));
        assert_eq!(validate_claims(&c, now), Ok(()));
    }

    #[test]
    fn rejects_expired_claims() {
        let now = Utc::now();
        let c = claims(now - Duration::hours(2), now - Duration::hours(1));
        assert_eq!(validate_claims(&c, now), Err(TokenValidationError::Expired));
    }

    #[test]
    fn rejects_claims_issued_in_the_future() {
        let now = Utc::now();
        let c = claims(now + Duration::minutes(1), now + Duration::hours(1));
        assert_eq!(
            validate_claims(&c, now),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn rejects_inverted_time_window() {
        let now = Utc::now();
        let c = claims(now + Duration::hours(1), now - Duration::hours(1));
        assert_eq!(
            validate_claims(&c, now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let c = claims(now - Duration::hours(1), now);
        assert_eq!(validate_claims(&c, now), Err(TokenValidationError::Expired));
    }
}
