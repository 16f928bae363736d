use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

/// Claims carried by both token kinds. `typ` keeps one from standing in
/// for the other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    /// Makes two tokens minted in the same second hash differently.
    pub jti: String,
    pub typ: String,
}

/// Hex SHA-256 of a raw token. Only this digest is stored server-side.
pub fn hash_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").expect("JWT_SECRET must be set")
}

pub fn access_token_expiry_minutes() -> i64 {
    std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(15)
}

pub fn refresh_token_expiry_days() -> i64 {
    std::env::var("JWT_REFRESH_TOKEN_EXPIRY_DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(7)
}

fn sign(
    user_id: Uuid,
    email: &str,
    typ: &str,
    expires_at: DateTime<Utc>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        iat: Utc::now().timestamp(),
        exp: expires_at.timestamp(),
        jti: Uuid::new_v4().to_string(),
        typ: typ.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
}

pub fn create_access_token(user_id: Uuid, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + Duration::minutes(access_token_expiry_minutes());
    sign(user_id, email, TOKEN_TYPE_ACCESS, expires_at)
}

/// A refresh token and the instant it stops being accepted.
pub fn create_refresh_token(
    user_id: Uuid,
    email: &str,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + Duration::days(refresh_token_expiry_days());
    let token = sign(user_id, email, TOKEN_TYPE_REFRESH, expires_at)?;
    Ok((token, expires_at))
}

fn decode_typed(token: &str, expected_typ: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )?;
    if data.claims.typ != expected_typ {
        return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
    }
    Ok(data.claims)
}

pub fn validate_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode_typed(token, TOKEN_TYPE_ACCESS)
}

pub fn validate_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode_typed(token, TOKEN_TYPE_REFRESH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_secret() {
        std::env::set_var("JWT_SECRET", "exasecure-unit-test-secret");
    }

    #[test]
    fn access_token_carries_identity() {
        setup_test_secret();
        let id = Uuid::new_v4();
        let token = create_access_token(id, "proctor@exasecure.ai").unwrap();
        let claims = validate_access_token(&token).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.email, "proctor@exasecure.ai");
        assert_eq!(claims.typ, TOKEN_TYPE_ACCESS);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_access_token_is_rejected() {
        setup_test_secret();
        let token = sign(
            Uuid::new_v4(),
            "late@exasecure.ai",
            TOKEN_TYPE_ACCESS,
            Utc::now() - Duration::hours(1),
        )
        .unwrap();
        assert!(validate_access_token(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        setup_test_secret();
        assert!(validate_access_token("not.a.jwt").is_err());
        assert!(validate_refresh_token("").is_err());
    }

    #[test]
    fn token_kinds_are_not_interchangeable() {
        setup_test_secret();
        let id = Uuid::new_v4();
        let access = create_access_token(id, "a@exasecure.ai").unwrap();
        let (refresh, _) = create_refresh_token(id, "a@exasecure.ai").unwrap();

        assert!(validate_access_token(&refresh).is_err());
        assert!(validate_refresh_token(&access).is_err());
        assert!(validate_refresh_token(&refresh).is_ok());
    }

    #[test]
    fn refresh_outlives_access() {
        setup_test_secret();
        let id = Uuid::new_v4();
        let access = validate_access_token(&create_access_token(id, "a@exasecure.ai").unwrap()).unwrap();
        let (refresh, expires_at) = create_refresh_token(id, "a@exasecure.ai").unwrap();
        let refresh = validate_refresh_token(&refresh).unwrap();

        assert!(refresh.exp > access.exp);
        assert_eq!(refresh.exp, expires_at.timestamp());
    }

    #[test]
    fn same_second_tokens_hash_differently() {
        setup_test_secret();
        let id = Uuid::new_v4();
        let (a, _) = create_refresh_token(id, "a@exasecure.ai").unwrap();
        let (b, _) = create_refresh_token(id, "a@exasecure.ai").unwrap();
        assert_ne!(hash_token(&a), hash_token(&b));
    }

    #[test]
    fn token_hash_is_stable_hex() {
        let h = hash_token("header.payload.signature");
        assert_eq!(h, hash_token("header.payload.signature"));
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
