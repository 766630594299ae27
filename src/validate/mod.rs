//! Request validation boundary.
//!
//! Client input is loosely typed: durations arrive as numbers or numeric
//! strings, dates as free-form strings, and any field may be missing. One
//! validation function per endpoint turns a loose request body into a typed
//! payload, or a [`ValidationError`] naming the offending field. Nothing
//! unvalidated flows past this module.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::dates;

/// Fields checked for presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    UserId,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let article = match self {
            Field::Username => "An username",
            Field::UserId => "The user id",
            Field::Description => "A description",
        };
        write!(f, "{}", article)
    }
}

/// A client input defect. Reported inline in the response body, never as a
/// transport-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("A numeric {0} is required")]
    InvalidNumber(&'static str),
}

/// A duration as clients actually send it: a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseNumber {
    /// Interpret as whole positive minutes.
    fn as_minutes(&self) -> Option<u32> {
        let value = match self {
            LooseNumber::Int(n) => *n as f64,
            LooseNumber::Float(f) => *f,
            LooseNumber::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if value.is_finite() && value > 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
            Some(value as u32)
        } else {
            None
        }
    }
}

/// Request body for user creation.
#[derive(Debug, Default, Deserialize)]
pub struct NewUserBody {
    #[serde(default)]
    pub username: Option<String>,
}

/// Request body for exercise logging.
#[derive(Debug, Default, Deserialize)]
pub struct NewExerciseBody {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub duration: Option<LooseNumber>,

    #[serde(default)]
    pub date: Option<String>,
}

/// A validated, typed exercise-logging payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub description: String,
    pub duration: u32,
    pub date: NaiveDate,
}

/// Validate a user-creation request, returning the username to register.
pub fn new_username(body: &NewUserBody) -> Result<String, ValidationError> {
    match &body.username {
        Some(name) if !name.trim().is_empty() => Ok(name.clone()),
        _ => Err(ValidationError::MissingField(Field::Username)),
    }
}

/// Validate an exercise-logging request.
///
/// Checks user id, then description, then duration, short-circuiting on the
/// first failure. The date is normalized, never rejected.
pub fn new_exercise(user_id: &str, body: &NewExerciseBody) -> Result<NewExercise, ValidationError> {
    if user_id.trim().is_empty() {
        return Err(ValidationError::MissingField(Field::UserId));
    }

    let description = match &body.description {
        Some(d) if !d.trim().is_empty() => d.clone(),
        _ => return Err(ValidationError::MissingField(Field::Description)),
    };

    let duration = body
        .duration
        .as_ref()
        .and_then(LooseNumber::as_minutes)
        .ok_or(ValidationError::InvalidNumber("duration"))?;

    Ok(NewExercise {
        description,
        duration,
        date: dates::normalize(body.date.as_deref()),
    })
}
