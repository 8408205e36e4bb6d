use crate::{
    auth::{generate_token, hash_password, AuthResponse, LoginRequest, RegisterRequest},
    config::Config,
    error::AppError,
    models::Role,
    store,
};
use actix_web::{post, web, HttpResponse, Responder};
use chrono::Duration;
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns an authentication token. The role is
/// fixed here from the `is_admin` flag; duplicate usernames surface as 409 via
/// the database constraint.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    let password_hash = hash_password(&register_data.password)?;
    let role = if register_data.is_admin {
        Role::Admin
    } else {
        Role::User
    };

    let user = store::users::create_user(&pool, &register_data.username, &password_hash, role)
        .await?;

    log::info!("Registered user '{}' with role {}", user.username, user.role.as_str());

    let roles = vec![user.role.as_str().to_string()];
    let token = generate_token(
        &user.username,
        &roles,
        Duration::minutes(config.token_ttl_minutes),
        config.jwt_secret.as_bytes(),
    )?;

    Ok(HttpResponse::Created().json(AuthResponse::bearer(token, user.id, roles)))
}

/// Login user
///
/// Authenticates a user and returns an authentication token carrying the
/// stored role as a claim.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    let user =
        store::users::authenticate_user(&pool, &login_data.username, &login_data.password).await?;

    let roles = vec![user.role.as_str().to_string()];
    let token = generate_token(
        &user.username,
        &roles,
        Duration::minutes(config.token_ttl_minutes),
        config.jwt_secret.as_bytes(),
    )?;

    Ok(HttpResponse::Ok().json(AuthResponse::bearer(token, user.id, roles)))
}
