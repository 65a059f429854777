//! JWT token handling

use crate::auth::models::{Role, User};
use crate::error::{Error, Result};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id
    pub id: u64,
    /// Email at issuance time
    pub email: String,
    /// Role at issuance time
    pub role: Role,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
}

/// Signs and verifies tokens with a shared secret. Constructed once at
/// startup from configuration and handed to whoever needs it.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: chrono::Duration,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &str, lifetime: chrono::Duration) -> Self {
        let mut validation = Validation::default();
        // Expiry is enforced exactly, no clock-skew grace.
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
            validation,
        }
    }

    /// Sign a token for the user, expiring `lifetime` from now.
    pub fn issue(&self, user: &User) -> Result<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: now,
            exp: now + self.lifetime.num_seconds(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| Error::Other(format!("Failed to sign token: {}", e)))
    }

    /// Validate and decode a token
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => Error::Expired,
                ErrorKind::InvalidSignature => Error::InvalidSignature,
                _ => Error::MalformedToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(role: Role) -> User {
        User {
            id: 42,
            email: "alice@example.com".to_string(),
            password_hash: String::new(),
            role,
        }
    }

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", chrono::Duration::hours(1))
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let issuer = issuer();
        let token = issuer.issue(&test_user(Role::Admin)).expect("issue");
        let claims = issuer.verify(&token).expect("verify");

        assert_eq!(claims.id, 42);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_has_jwt_shape() {
        let token = issuer().issue(&test_user(Role::User)).expect("issue");
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_expired_token_rejected() {
        let expired = TokenIssuer::new("test-secret", chrono::Duration::hours(-1));
        let token = expired.issue(&test_user(Role::Admin)).expect("issue");

        assert!(matches!(issuer().verify(&token), Err(Error::Expired)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let other = TokenIssuer::new("other-secret", chrono::Duration::hours(1));
        let token = other.issue(&test_user(Role::Admin)).expect("issue");

        assert!(matches!(
            issuer().verify(&token),
            Err(Error::InvalidSignature)
        ));
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert!(matches!(
            issuer().verify("not-a-jwt-token"),
            Err(Error::MalformedToken)
        ));
        assert!(matches!(
            issuer().verify("invalid.token.here"),
            Err(Error::MalformedToken)
        ));
    }

    #[test]
    fn test_claims_payload_shape() {
        let issuer = issuer();
        let token = issuer.issue(&test_user(Role::Moderator)).expect("issue");
        let claims = issuer.verify(&token).expect("verify");
        let value = serde_json::to_value(&claims).unwrap();

        assert_eq!(value["id"], 42);
        assert_eq!(value["email"], "alice@example.com");
        assert_eq!(value["role"], "Moderator");
        assert!(value["iat"].is_i64());
        assert!(value["exp"].is_i64());
    }
}
