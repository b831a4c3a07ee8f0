use serde::{Deserialize, Serialize};

/// A scheduled task as exchanged with the outside world.
///
/// `date` is `YYYYMMDD`; `repeat` is a repeat rule, empty for one-off tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl Task {
    pub fn is_repeating(&self) -> bool {
        !self.repeat.trim().is_empty()
    }
}

/// What happens to a task once it is marked done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum CompletionResult {
    /// One-off task: drop it.
    Remove,
    /// Repeating task: move it to its next date.
    Reschedule { date: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserializes_with_missing_fields() {
        let task: Task = serde_json::from_str(r#"{"title": "Call mom", "repeat": "d 7"}"#).unwrap();
        assert_eq!(task.title, "Call mom");
        assert_eq!(task.date, "");
        assert!(task.is_repeating());
    }

    #[test]
    fn test_blank_repeat_is_one_off() {
        let task = Task {
            repeat: "  ".to_string(),
            ..Default::default()
        };
        assert!(!task.is_repeating());
    }

    #[test]
    fn test_completion_result_json() {
        let json = serde_json::to_string(&CompletionResult::Reschedule {
            date: "20240113".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"action":"reschedule","date":"20240113"}"#);
        let json = serde_json::to_string(&CompletionResult::Remove).unwrap();
        assert_eq!(json, r#"{"action":"remove"}"#);
    }
}
