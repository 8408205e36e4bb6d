pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::{AdminUser, CurrentUser};
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username of the account to authenticate.
    #[validate(length(min = 1))]
    pub username: String,
    /// The account password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username for the new account.
    /// Must be between 3 and 32 characters, alphanumeric, and can include underscores or hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Password for the new account.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
    /// Whether the account is created with the admin role.
    /// The role is fixed at registration and never re-derived afterwards.
    #[serde(default)]
    pub is_admin: bool,
}

/// Response structure after successful authentication (login or registration).
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The JWT (JSON Web Token) for session authentication.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// The unique identifier of the authenticated user.
    pub user_id: i32,
    /// Role claims carried by the issued token.
    pub roles: Vec<String>,
}

impl AuthResponse {
    pub fn bearer(access_token: String, user_id: i32, roles: Vec<String>) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user_id,
            roles,
        }
    }
}
