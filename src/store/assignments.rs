use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{Task, TaskAssignment};

/// Links a task to a user.
///
/// The existence checks and the insert run in one transaction; a task or user
/// deleted concurrently cannot leave a dangling assignment behind. Either
/// entity missing yields `NotFound` and the assignment table is unchanged.
/// Duplicate assignments of the same pair are permitted.
pub async fn assign_task(
    pool: &PgPool,
    user_id: i32,
    task_id: i32,
) -> Result<TaskAssignment, AppError> {
    let mut tx = pool.begin().await?;

    let task_exists = sqlx::query_scalar::<_, i32>("SELECT id FROM tasks WHERE id = $1")
        .bind(task_id)
        .fetch_optional(&mut *tx)
        .await?;
    if task_exists.is_none() {
        return Err(AppError::NotFound("Task not found".into()));
    }

    let user_exists = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;
    if user_exists.is_none() {
        return Err(AppError::NotFound("User not found".into()));
    }

    let assignment = sqlx::query_as::<_, TaskAssignment>(
        "INSERT INTO task_assignments (user_id, task_id)
         VALUES ($1, $2)
         RETURNING id, user_id, task_id",
    )
    .bind(user_id)
    .bind(task_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(assignment)
}

/// Removes the assignment rows linking a task to a user. Duplicate rows for
/// the pair are all removed in one call.
pub async fn unassign_task(pool: &PgPool, task_id: i32, user_id: i32) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM task_assignments WHERE task_id = $1 AND user_id = $2")
        .bind(task_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not assigned to this user".into()));
    }

    Ok(())
}

/// Lists the tasks assigned to a user, or `NotFound` if the user does not exist.
pub async fn list_tasks_for_user(pool: &PgPool, user_id: i32) -> Result<Vec<Task>, AppError> {
    let user_exists = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    if user_exists.is_none() {
        return Err(AppError::NotFound("User not found".into()));
    }

    let tasks = sqlx::query_as::<_, Task>(
        "SELECT t.id, t.title, t.description, t.created_at, t.updated_at
         FROM tasks t
         JOIN task_assignments a ON a.task_id = t.id
         WHERE a.user_id = $1
         ORDER BY t.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(tasks)
}
