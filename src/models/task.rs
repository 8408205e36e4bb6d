use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Input structure for creating or updating a task.
/// Contains validation rules for its fields.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task.
    /// Must be between 1 and 100 characters.
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    /// An optional description for the task.
    /// Maximum length of 500 characters if provided.
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_input_validation() {
        let valid_input = TaskInput {
            title: "Buy milk".to_string(),
            description: Some("From the corner shop".to_string()),
        };
        assert!(valid_input.validate().is_ok());

        // Empty title
        let invalid_input = TaskInput {
            title: "".to_string(),
            description: None,
        };
        assert!(invalid_input.validate().is_err());

        // Title too long (max 100)
        let invalid_input = TaskInput {
            title: "a".repeat(101),
            description: None,
        };
        assert!(invalid_input.validate().is_err());

        // Description too long (max 500)
        let invalid_input = TaskInput {
            title: "Valid title".to_string(),
            description: Some("b".repeat(501)),
        };
        assert!(invalid_input.validate().is_err());

        // Boundary values pass
        let boundary_input = TaskInput {
            title: "a".repeat(100),
            description: Some("b".repeat(500)),
        };
        assert!(boundary_input.validate().is_ok());
    }
}
