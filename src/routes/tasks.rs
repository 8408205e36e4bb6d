use crate::{auth::CurrentUser, error::AppError, store};
use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

/// Retrieves the full task list.
///
/// Any authenticated user may read tasks; the `CurrentUser` extractor
/// guarantees the request passed the auth guard.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    _user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let tasks = store::tasks::list_tasks(&pool).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Retrieves a specific task by its ID.
///
/// ## Responses:
/// - `200 OK`: Returns the `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the task with the given ID does not exist.
#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<i32>,
    _user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let task = store::tasks::get_task(&pool, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(task))
}
