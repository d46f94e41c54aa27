use axum::http::StatusCode;
use axum::response::IntoResponse;

pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
