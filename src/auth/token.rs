use crate::error::AppError;
use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the username of the authenticated account.
    pub sub: String,
    /// Role claims granted to this token (e.g. `["user"]` or `["admin"]`).
    pub roles: Vec<String>,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Generates a signed JWT for a given subject and role set.
///
/// The token encodes the subject, its roles, and an absolute expiry computed
/// from `ttl`, and is signed with HS256 using the server-held secret. There is
/// no refresh or rotation mechanism; an expired token can only be replaced by
/// re-authenticating.
pub fn generate_token(
    username: &str,
    roles: &[String],
    ttl: Duration,
    secret: &[u8],
) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(ttl)
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: username.to_string(),
        roles: roles.to_vec(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
}

/// Verifies a JWT string and decodes its claims.
///
/// Signature integrity and expiry are checked with zero leeway; a token whose
/// expiry equals the current time is already invalid. Malformed payloads, bad
/// signatures, and expired tokens all map to `AppError::Unauthenticated`.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let claims = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| AppError::Unauthenticated(format!("Invalid token: {}", e)))?;

    // jsonwebtoken accepts exp == now; the contract here is `now >= exp` is invalid.
    if chrono::Utc::now().timestamp() as usize >= claims.exp {
        return Err(AppError::Unauthenticated("Invalid token: expired".into()));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECRET: &[u8] = b"test_secret_for_token_tests";

    #[test]
    fn test_token_generation_and_verification() {
        let roles = vec!["user".to_string()];
        let token = generate_token("alice", &roles, Duration::minutes(30), SECRET).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.roles, roles);
    }

    #[test]
    fn test_zero_ttl_token_is_invalid_immediately() {
        let roles = vec!["user".to_string()];
        let token = generate_token("alice", &roles, Duration::zero(), SECRET).unwrap();

        match verify_token(&token, SECRET) {
            Err(AppError::Unauthenticated(_)) => {}
            Ok(_) => panic!("Token with zero ttl should be invalid upon verification"),
            Err(e) => panic!("Unexpected error type for zero-ttl token: {:?}", e),
        }
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let roles = vec!["user".to_string()];
        let token = generate_token("alice", &roles, Duration::hours(-2), SECRET).unwrap();

        match verify_token(&token, SECRET) {
            Err(AppError::Unauthenticated(msg)) => {
                assert!(
                    msg.contains("ExpiredSignature") || msg.contains("expired"),
                    "Unexpected error message for expired token: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_tampered_signature_is_invalid() {
        let roles = vec!["admin".to_string()];
        let token = generate_token("alice", &roles, Duration::minutes(30), SECRET).unwrap();

        // Flip the last character of the signature segment.
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        match verify_token(&tampered, SECRET) {
            Err(AppError::Unauthenticated(_)) => {}
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for tampered token: {:?}", e),
        }
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let roles = vec!["user".to_string()];
        let token = generate_token("alice", &roles, Duration::minutes(30), SECRET).unwrap();

        match verify_token(&token, b"a_completely_different_secret") {
            Err(AppError::Unauthenticated(_)) => {}
            Ok(_) => panic!("Token should not verify under a different secret"),
            Err(e) => panic!("Unexpected error type: {:?}", e),
        }
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        match verify_token("not-a-jwt-at-all", SECRET) {
            Err(AppError::Unauthenticated(_)) => {}
            Ok(_) => panic!("Garbage input should not verify"),
            Err(e) => panic!("Unexpected error type: {:?}", e),
        }
    }
}
