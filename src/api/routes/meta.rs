//! Service meta endpoints.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub greeting: &'static str,
}

/// GET /api/hello — liveness probe.
pub async fn hello() -> Json<Greeting> {
    Json(Greeting {
        greeting: "hello API",
    })
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::routes::testing::{get_json, setup_test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_hello() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = get_json(app, "/api/hello").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["greeting"], "hello API");
    }
}
