//! Task model definitions

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Wire form of the priority, as it appears in the backing document
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A task in the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: TaskPriority,
    /// Milliseconds since epoch, assigned at creation and never regenerated
    pub created_at: i64,
}

/// Candidate task payload as submitted by API clients.
///
/// Deserialization enforces the structural rules: required fields, the
/// priority enumeration, and no unrecognized properties. `validate`
/// covers the rest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskDraft {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: TaskPriority,
}

// A supplied id must be a string; `null` is not an absent id.
fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl TaskDraft {
    /// Check the field-level constraints the type system does not capture:
    /// string fields must be non-empty. Whitespace-only strings pass.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(Error::InvalidTask("title must not be empty".to_string()));
        }
        if self.description.is_empty() {
            return Err(Error::InvalidTask(
                "description must not be empty".to_string(),
            ));
        }
        if let Some(id) = &self.id {
            if id.is_empty() {
                return Err(Error::InvalidTask("id must not be empty".to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> std::result::Result<TaskDraft, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_draft_accepts_full_payload() {
        let draft = parse(json!({
            "id": "task-1",
            "title": "Write docs",
            "description": "Cover the new endpoints",
            "completed": false,
            "priority": "high"
        }))
        .unwrap();

        assert_eq!(draft.id, Some("task-1".to_string()));
        assert_eq!(draft.priority, TaskPriority::High);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_accepts_missing_id() {
        let draft = parse(json!({
            "title": "Write docs",
            "description": "Cover the new endpoints",
            "completed": true,
            "priority": "low"
        }))
        .unwrap();

        assert!(draft.id.is_none());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_rejects_missing_required_field() {
        let result = parse(json!({ "title": "Write docs" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_rejects_unknown_field() {
        let result = parse(json!({
            "title": "Write docs",
            "description": "Cover the new endpoints",
            "completed": false,
            "priority": "low",
            "dueDate": "tomorrow"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_rejects_invalid_priority() {
        let result = parse(json!({
            "title": "Write docs",
            "description": "Cover the new endpoints",
            "completed": false,
            "priority": "urgent"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_rejects_null_id() {
        let result = parse(json!({
            "id": null,
            "title": "Write docs",
            "description": "Cover the new endpoints",
            "completed": false,
            "priority": "low"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_strings() {
        let empty_title = parse(json!({
            "title": "",
            "description": "Cover the new endpoints",
            "completed": false,
            "priority": "low"
        }))
        .unwrap();
        assert!(empty_title.validate().is_err());

        let empty_description = parse(json!({
            "title": "Write docs",
            "description": "",
            "completed": false,
            "priority": "low"
        }))
        .unwrap();
        assert!(empty_description.validate().is_err());

        let empty_id = parse(json!({
            "id": "",
            "title": "Write docs",
            "description": "Cover the new endpoints",
            "completed": false,
            "priority": "low"
        }))
        .unwrap();
        assert!(empty_id.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_whitespace_strings() {
        // minLength-style rule: no trimming
        let draft = parse(json!({
            "title": " ",
            "description": " ",
            "completed": false,
            "priority": "medium"
        }))
        .unwrap();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_task_wire_format() {
        let task = Task {
            id: "task-1".to_string(),
            title: "Write docs".to_string(),
            description: "Cover the new endpoints".to_string(),
            completed: false,
            priority: TaskPriority::Medium,
            created_at: 1721997600000,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["priority"], "medium");
        assert_eq!(value["createdAt"], 1721997600000i64);
        assert!(value.get("created_at").is_none());
    }
}
