//! Exercise logging.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::dates;
use crate::models::UserId;
use crate::validate::{self, NewExerciseBody};

#[derive(Debug, Serialize)]
pub struct ExerciseLoggedResponse {
    /// Id of the user, not of the exercise
    pub id: UserId,
    pub username: String,
    pub description: String,
    pub duration: u32,
    /// Human-readable date, e.g. "Mon Jan 01 2024"
    pub date: String,
}

/// POST /api/users/{id}/exercises — log an exercise against a user.
///
/// Validation runs before the user lookup; the exercise record and the
/// user's reference append are two dependent writes with no rollback in
/// between.
pub async fn log_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Option<Json<NewExerciseBody>>,
) -> Result<Json<ExerciseLoggedResponse>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let payload = validate::new_exercise(&user_id, &body)?;

    let user = state
        .users
        .find_by_id(&user_id)
        .await
        .ok_or_else(|| ApiError::UserNotFound(user_id.clone()))?;

    let exercise = state.exercises.create(payload).await?;
    let user = state
        .users
        .append_exercise_ref(&user.id, exercise.id.clone())
        .await?
        .ok_or(ApiError::UserNotFound(user_id))?;

    Ok(Json(ExerciseLoggedResponse {
        id: user.id,
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: dates::human(exercise.date),
    }))
}
