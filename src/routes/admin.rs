use crate::{auth::AdminUser, error::AppError, models::TaskInput, store};
use actix_web::{delete, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

/// Creates a new task.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the authenticated user is not an admin.
/// - `422 Unprocessable Entity`: If input validation on `TaskInput` fails.
#[post("/tasks")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    admin: AdminUser,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    // Validate input
    task_data.validate()?;

    let task = store::tasks::create_task(&pool, &task_data).await?;

    log::info!("Admin '{}' created task {}", admin.0.username, task.id);

    Ok(HttpResponse::Created().json(task))
}

/// Updates an existing task's title and description.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Task` object as JSON.
/// - `403 Forbidden`: If the authenticated user is not an admin.
/// - `404 Not Found`: If the task with the given ID does not exist.
/// - `422 Unprocessable Entity`: If input validation on `TaskInput` fails.
#[put("/tasks/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    _admin: AdminUser,
    task_id: web::Path<i32>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = store::tasks::update_task(&pool, task_id.into_inner(), &task_data).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task by its ID, together with its assignment rows.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `403 Forbidden`: If the authenticated user is not an admin.
/// - `404 Not Found`: If the task with the given ID does not exist.
#[delete("/tasks/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    admin: AdminUser,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let id = task_id.into_inner();
    store::tasks::delete_task(&pool, id).await?;

    log::info!("Admin '{}' deleted task {}", admin.0.username, id);

    Ok(HttpResponse::NoContent().finish())
}

#[derive(Debug, Deserialize)]
pub struct AssignmentParams {
    pub task_id: i32,
    pub user_id: i32,
}

/// Assigns a task to a user.
///
/// ## Query Parameters:
/// - `task_id`: The task to assign.
/// - `user_id`: The user receiving the task.
///
/// ## Responses:
/// - `201 Created`: Returns the created `TaskAssignment` as JSON.
/// - `403 Forbidden`: If the authenticated user is not an admin.
/// - `404 Not Found`: If the task or the user does not exist.
#[post("/assignments")]
pub async fn assign_task(
    pool: web::Data<PgPool>,
    _admin: AdminUser,
    params: web::Query<AssignmentParams>,
) -> Result<impl Responder, AppError> {
    let assignment = store::assignments::assign_task(&pool, params.user_id, params.task_id).await?;

    Ok(HttpResponse::Created().json(assignment))
}

/// Removes the assignment linking a task to a user.
///
/// ## Responses:
/// - `204 No Content`: On successful removal.
/// - `403 Forbidden`: If the authenticated user is not an admin.
/// - `404 Not Found`: If the task was not assigned to this user.
#[delete("/assignments/{task_id}/{user_id}")]
pub async fn unassign_task(
    pool: web::Data<PgPool>,
    _admin: AdminUser,
    path: web::Path<(i32, i32)>,
) -> Result<impl Responder, AppError> {
    let (task_id, user_id) = path.into_inner();
    store::assignments::unassign_task(&pool, task_id, user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
