//! User registration and listing.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{User, UserId};
use crate::validate::{self, NewUserBody};

#[derive(Debug, Serialize)]
pub struct UserCreatedResponse {
    pub id: UserId,
    pub username: String,
}

/// POST /api/users — create a user, or fetch the existing one by name.
pub async fn create_user(
    State(state): State<AppState>,
    body: Option<Json<NewUserBody>>,
) -> Result<Json<UserCreatedResponse>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let username = validate::new_username(&body)?;

    let user = state.users.find_or_create_by_username(&username).await?;

    Ok(Json(UserCreatedResponse {
        id: user.id,
        username: user.username,
    }))
}

/// GET /api/users — list all users.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list_all().await)
}
