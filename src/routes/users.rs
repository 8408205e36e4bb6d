use crate::{auth::CurrentUser, error::AppError, models::UserRead, store};
use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

/// Lists all registered users as their public projection.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `UserRead` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
#[get("")]
pub async fn list_users(
    pool: web::Data<PgPool>,
    _user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let users = store::users::list_users(&pool).await?;
    let users: Vec<UserRead> = users.into_iter().map(UserRead::from).collect();

    Ok(HttpResponse::Ok().json(users))
}

/// Retrieves a single user by ID.
///
/// ## Responses:
/// - `200 OK`: Returns the `UserRead` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the user with the given ID does not exist.
#[get("/{id}")]
pub async fn get_user(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
    _user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let user = store::users::get_user(&pool, user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserRead::from(user)))
}

/// Lists the tasks assigned to a user.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the user with the given ID does not exist.
#[get("/{id}/tasks")]
pub async fn user_tasks(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
    _user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let tasks = store::assignments::list_tasks_for_user(&pool, user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(tasks))
}
