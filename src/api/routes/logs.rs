//! Exercise log retrieval.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::aggregate::{self, LogOptions, LogResponse};
use crate::api::state::AppState;
use crate::api::ApiError;

/// Raw query parameters for the log window. Kept as strings so that an
/// unparseable value degrades to "no filter" instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    fn options(&self) -> LogOptions {
        let parse_date = |s: &Option<String>| {
            s.as_deref()
                .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
        };
        LogOptions {
            from: parse_date(&self.from),
            to: parse_date(&self.to),
            limit: self
                .limit
                .as_deref()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|n| *n > 0),
        }
    }
}

/// GET /api/users/{id}/logs — the user's exercise log, optionally windowed
/// by `from`/`to` (inclusive, yyyy-mm-dd) and capped by `limit`.
pub async fn get_log(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogResponse>, ApiError> {
    let user = state
        .users
        .find_by_id(&user_id)
        .await
        .ok_or(ApiError::UserNotFound(user_id))?;

    let exercises = state.exercises.resolve_refs(&user.exercises).await;

    Ok(Json(aggregate::build_log(
        &user,
        &exercises,
        &query.options(),
    )))
}
