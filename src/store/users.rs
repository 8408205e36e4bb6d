use sqlx::PgPool;

use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::models::{Role, User};

/// Inserts a new user row.
///
/// Uniqueness of the username is enforced by the database constraint, not by a
/// prior existence check: under concurrent registration of the same name,
/// exactly one insert succeeds and the other surfaces as `Conflict`.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    role: Role,
) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password_hash, role)
         VALUES ($1, $2, $3)
         RETURNING id, username, password_hash, role, created_at",
    )
    .bind(username)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return AppError::Conflict("Username already exists".into());
            }
        }
        e.into()
    })
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, role, created_at FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Resolves a username/password pair to the stored user.
///
/// An unknown username and a wrong password are indistinguishable to the
/// caller; both report invalid credentials.
pub async fn authenticate_user(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<User, AppError> {
    let user = find_by_username(pool, username)
        .await?
        .ok_or_else(|| AppError::Unauthenticated("Invalid credentials".into()))?;

    if !verify_password(password, &user.password_hash) {
        return Err(AppError::Unauthenticated("Invalid credentials".into()));
    }

    Ok(user)
}

pub async fn get_user(pool: &PgPool, id: i32) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, role, created_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("User not found".into()))
}

pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, role, created_at FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}
