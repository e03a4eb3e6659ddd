use crate::state::AppState;
use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

/// Basic health check handler
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::TestFixture;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_endpoint() {
        let fixture = TestFixture::new().await;

        let response = fixture.get("/health").await;

        response.assert_ok();
        assert_eq!(
            response.json,
            json!({
                "status": "ok",
            })
        );
    }
}
