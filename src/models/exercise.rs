//! Exercise model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, ExerciseId};

/// A single logged exercise.
///
/// Created once per logging request and immutable afterwards. Referenced
/// (not owned) by exactly one user's exercise list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier, assigned at creation
    pub id: ExerciseId,

    /// What was done
    pub description: String,

    /// Duration in minutes, strictly positive
    pub duration: u32,

    /// Calendar date the exercise is logged against (canonical yyyy-mm-dd)
    pub date: NaiveDate,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Exercise {
    /// Create a new Exercise with a fresh id.
    pub fn new(description: String, duration: u32, date: NaiveDate) -> Self {
        Self {
            id: EntityId::generate(),
            description,
            duration,
            date,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_exercise() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let ex = Exercise::new("run".to_string(), 30, date);
        assert_eq!(ex.description, "run");
        assert_eq!(ex.duration, 30);
        assert_eq!(ex.date, date);
        assert!(!ex.id.as_str().is_empty());
    }

    #[test]
    fn test_exercise_date_serializes_canonical() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let ex = Exercise::new("swim".to_string(), 45, date);
        let json = serde_json::to_value(&ex).unwrap();
        assert_eq!(json["date"], "2024-03-05");
    }
}
