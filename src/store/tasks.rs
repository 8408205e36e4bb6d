use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{Task, TaskInput};

pub async fn create_task(pool: &PgPool, input: &TaskInput) -> Result<Task, AppError> {
    let task = sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (title, description)
         VALUES ($1, $2)
         RETURNING id, title, description, created_at, updated_at",
    )
    .bind(&input.title)
    .bind(&input.description)
    .fetch_one(pool)
    .await?;

    Ok(task)
}

pub async fn update_task(pool: &PgPool, id: i32, input: &TaskInput) -> Result<Task, AppError> {
    sqlx::query_as::<_, Task>(
        "UPDATE tasks
         SET title = $1, description = $2, updated_at = now()
         WHERE id = $3
         RETURNING id, title, description, created_at, updated_at",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".into()))
}

/// Deletes a task; its assignment rows go with it via the `ON DELETE CASCADE`
/// foreign key, so no user's task list can keep referencing a removed task.
pub async fn delete_task(pool: &PgPool, id: i32) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(())
}

pub async fn get_task(pool: &PgPool, id: i32) -> Result<Task, AppError> {
    sqlx::query_as::<_, Task>(
        "SELECT id, title, description, created_at, updated_at FROM tasks WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".into()))
}

pub async fn list_tasks(pool: &PgPool) -> Result<Vec<Task>, AppError> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, created_at, updated_at FROM tasks ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(tasks)
}
