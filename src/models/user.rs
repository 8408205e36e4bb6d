use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Access level of a user account.
/// Corresponds to the `user_role` SQL enum.
///
/// Assigned once at registration and stored on the row; it is never derived
/// from the username text.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account: can read tasks and users.
    User,
    /// Administrator: can additionally create, update, delete, and assign tasks.
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// A user row as stored in the database.
///
/// The password hash is never serialized into responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a user, returned by the listing and lookup endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRead {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

impl From<User> for UserRead {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            role: Role::User,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn test_user_read_projection() {
        let user = User {
            id: 7,
            username: "bob".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            role: Role::Admin,
            created_at: Utc::now(),
        };

        let read: UserRead = user.into();
        assert_eq!(read.id, 7);
        assert_eq!(read.username, "bob");
        assert_eq!(read.role, Role::Admin);
    }
}
