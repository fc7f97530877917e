// Task model and id generation

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry
///
/// Serialized field names follow the historical camelCase payload, so saved
/// state written by older builds keeps loading. Fields other than `id`,
/// `text` and `completed` take defaults when absent from a stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default = "unix_epoch")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Build a fresh pending task from already-validated text
    pub fn new(text: String, priority: Priority, due_date: Option<NaiveDate>) -> Self {
        Self {
            id: generate_id(),
            text,
            completed: false,
            priority,
            due_date,
            created_at: Utc::now(),
            completed_at: None,
            updated_at: None,
        }
    }

    /// True when the task is still open and its due date lies before `now`
    ///
    /// A due date is compared as its midnight instant, so a task due today
    /// counts as overdue once the day has started.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        if self.completed {
            return false;
        }
        match self.due_date {
            Some(due) => due.and_time(NaiveTime::MIN).and_utc() < now,
            None => false,
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort rank: high=3, medium=2, low=1
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {other} (expected low, medium or high)")),
        }
    }
}

/// Generate a unique task id: time-ordered with a random component
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Write report".to_string(), Priority::High, None);
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
        assert!(task.updated_at.is_none());
        assert!(task.created_at > DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_priority_serialization() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"low\"");
        let p: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(p, Priority::Medium);
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let task = Task::new(
            "Buy milk".to_string(),
            Priority::Medium,
            Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
        );
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"dueDate\":\"2025-03-01\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"completedAt\""));
    }

    #[test]
    fn test_task_deserializes_with_defaults() {
        let json = r#"{"id":"t1","text":"Buy milk","completed":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.created_at, DateTime::UNIX_EPOCH);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_overdue_requires_open_task_and_past_due_date() {
        let now = "2025-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let due_past = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let due_future = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        let mut task = Task::new("a".to_string(), Priority::Medium, Some(due_past));
        assert!(task.is_overdue_at(now));

        task.completed = true;
        assert!(!task.is_overdue_at(now));

        let task = Task::new("b".to_string(), Priority::Medium, Some(due_future));
        assert!(!task.is_overdue_at(now));

        let task = Task::new("c".to_string(), Priority::Medium, None);
        assert!(!task.is_overdue_at(now));
    }

    #[test]
    fn test_due_today_is_overdue_once_day_started() {
        let now = "2025-06-15T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let due_today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let task = Task::new("a".to_string(), Priority::Medium, Some(due_today));
        assert!(task.is_overdue_at(now));
    }
}
