use crate::error::AppError;
use bcrypt::{hash, DEFAULT_COST};

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
}

/// Checks a plaintext password against a stored bcrypt digest.
///
/// A malformed digest counts as a failed verification rather than an error:
/// whatever is stored, the caller only learns "does not match".
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    bcrypt::verify(password, hashed_password).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing_and_verification() {
        let password = "test_password123";
        let hashed = hash_password(password).unwrap();

        assert!(verify_password(password, &hashed));
        assert!(!verify_password("wrong_password", &hashed));
    }

    #[test]
    fn test_verify_with_malformed_digest() {
        // A digest that is not valid bcrypt output must fail verification,
        // not crash or surface as a server error.
        assert!(!verify_password("test_password123", "invalidhashformat"));
        assert!(!verify_password("test_password123", ""));
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = "same_password";
        let first = hash_password(password).unwrap();
        let second = hash_password(password).unwrap();

        assert_ne!(first, second);
        assert!(verify_password(password, &first));
        assert!(verify_password(password, &second));
    }
}
