use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use storekeep_auth::{AuthClaims, TokenValidationError, TokenVerifier, validate_claims};

/// HS256 bearer-token verifier.
pub struct Hs256TokenVerifier {
    key: DecodingKey,
}

impl Hs256TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
        }
    }
}

impl TokenVerifier for Hs256TokenVerifier {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AuthClaims, TokenValidationError> {
        // Decoding only verifies signature and shape; the time window is
        // validated deterministically against the caller-supplied clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<AuthClaims>(token, &self.key, &validation)
            .map_err(|_| TokenValidationError::Invalid)?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};
    use storekeep_auth::PrincipalId;

    fn mint(secret: &[u8], claims: &AuthClaims) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn round_trip_with_valid_window() {
        let now = Utc::now();
        let claims = AuthClaims {
            sub: PrincipalId::new(),
            issued_at: now - Duration::minutes(1),
            expires_at: now + Duration::minutes(10),
        };

        let verifier = Hs256TokenVerifier::new(b"secret");
        let verified = verifier.verify(&mint(b"secret", &claims), now).unwrap();
        assert_eq!(verified, claims);
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let now = Utc::now();
        let claims = AuthClaims {
            sub: PrincipalId::new(),
            issued_at: now - Duration::minutes(1),
            expires_at: now + Duration::minutes(10),
        };

        let verifier = Hs256TokenVerifier::new(b"other-secret");
        assert_eq!(
            verifier.verify(&mint(b"secret", &claims), now),
            Err(TokenValidationError::Invalid)
        );
    }

    #[test]
    fn expired_claims_are_rejected_after_decode() {
        let now = Utc::now();
        let claims = AuthClaims {
            sub: PrincipalId::new(),
            issued_at: now - Duration::minutes(20),
            expires_at: now - Duration::minutes(10),
        };

        let verifier = Hs256TokenVerifier::new(b"secret");
        assert_eq!(
            verifier.verify(&mint(b"secret", &claims), now),
            Err(TokenValidationError::Expired)
        );
    }
}
