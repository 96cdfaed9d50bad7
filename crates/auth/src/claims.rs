use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PrincipalId;

/// Token claims model (transport-agnostic).
///
/// The minimal set of claims expected once a token has been decoded/verified
/// by whatever transport/security layer is in use. Role and activation state
/// are *not* claims: they are read from the principal record at request time
/// so revocation takes effect immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Subject / principal identifier.
    pub sub: PrincipalId,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,

    #[error("token is invalid")]
    Invalid,
}

/// Deterministically validate token claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// is intentionally outside this crate (see [`TokenVerifier`]).
pub fn validate_claims(claims: &AuthClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
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

/// Seam for signature verification implementations (HS256 etc.) owned by the
/// boundary layer.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AuthClaims, TokenValidationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims(issued_offset_min: i64, expires_offset_min: i64, now: DateTime<Utc>) -> AuthClaims {
        AuthClaims {
            sub: PrincipalId::new(),
            issued_at: now + Duration::minutes(issued_offset_min),
            expires_at: now + Duration::minutes(expires_offset_min),
        }
    }

    #[test]
    fn valid_window_passes() {
        let now = Utc::now();
        assert_eq!(validate_claims(&claims(-5, 5, now), now), Ok(()));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now();
        assert_eq!(
            validate_claims(&claims(-10, -5, now), now),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn future_token_is_rejected() {
        let now = Utc::now();
        assert_eq!(
            validate_claims(&claims(5, 10, now), now),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn inverted_window_is_rejected() {
        let now = Utc::now();
        assert_eq!(
            validate_claims(&claims(5, -5, now), now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }
}
