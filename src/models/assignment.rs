use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Join entity linking one user to one task.
///
/// `(user_id, task_id)` pairs are not unique; assigning the same task to the
/// same user twice creates two rows. Rows are removed when either referenced
/// entity is deleted.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct TaskAssignment {
    pub id: i32,
    pub user_id: i32,
    pub task_id: i32,
}
