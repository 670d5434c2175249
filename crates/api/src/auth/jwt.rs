//! JWT access-token generation/validation and refresh-token helpers.
//!
//! Access tokens are HS256-signed JWTs carrying the actor's role and
//! optional department scope, so the visibility filter never needs a user
//! lookup per request. Refresh tokens are opaque random strings; only
//! their SHA-256 hash is stored server-side.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use civik_core::types::DbId;
use civik_core::visibility::Actor;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The user's role name (e.g. `"administrator"`).
    pub role: String,
    /// Department scope for department heads; absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept: Option<DbId>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

impl Claims {
    /// The actor these claims describe.
    pub fn actor(&self) -> Actor {
        Actor {
            user_id: self.sub,
            role: self.role.clone(),
            department_id: self.dept,
        }
    }
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 30).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 14).
    pub refresh_token_expiry_days: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 30;
/// Default refresh token expiry in days.
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 14;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `30`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `14`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }
}

/// Generate an HS256 access token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    role: &str,
    department_id: Option<DbId>,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.access_token_expiry_mins * 60;

    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        dept: department_id,
        exp,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Generate a cryptographically random refresh token.
///
/// Returns `(plaintext_token, sha256_hex_hash)`. The plaintext goes to the
/// client; only the hash is persisted in the `sessions` table.
pub fn generate_refresh_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_refresh_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a refresh token.
pub fn hash_refresh_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use civik_core::roles::{ROLE_ADMINISTRATOR, ROLE_DEPARTMENT_HEAD};

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 30,
            refresh_token_expiry_days: 14,
        }
    }

    #[test]
    fn round_trip_preserves_role_and_department() {
        let config = test_config();
        let token = generate_access_token(7, ROLE_DEPARTMENT_HEAD, Some(3), &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token should validate");
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.role, ROLE_DEPARTMENT_HEAD);
        assert_eq!(claims.dept, Some(3));
        assert!(claims.exp > claims.iat);

        let actor = claims.actor();
        assert_eq!(actor.user_id, 7);
        assert_eq!(actor.department_id, Some(3));
    }

    #[test]
    fn department_claim_is_optional() {
        let config = test_config();
        let token = generate_access_token(1, ROLE_ADMINISTRATOR, None, &config)
            .expect("token generation should succeed");
        let claims = validate_token(&token, &config).expect("token should validate");
        assert_eq!(claims.dept, None);
    }

    #[test]
    fn expired_token_fails_validation() {
        let config = test_config();

        // Expired well past the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            role: ROLE_ADMINISTRATOR.to_string(),
            dept: None,
            exp: now - 300,
            iat: now - 600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn token_signed_with_different_secret_fails() {
        let config_a = test_config();
        let config_b = JwtConfig {
            secret: "a-different-secret".to_string(),
            ..test_config()
        };

        let token = generate_access_token(1, ROLE_ADMINISTRATOR, None, &config_a)
            .expect("token generation should succeed");
        assert!(validate_token(&token, &config_b).is_err());
    }

    #[test]
    fn refresh_token_hash_is_stable_sha256_hex() {
        let (plaintext, hash) = generate_refresh_token();
        assert_eq!(hash, hash_refresh_token(&plaintext));
        assert_eq!(hash.len(), 64);
    }
}
