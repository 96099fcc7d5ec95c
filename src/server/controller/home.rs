use axum::{http::StatusCode, response::IntoResponse};

pub static HOME_TAG: &str = "home";

/// Liveness probe answering with an empty body.
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Server is up"),
    ),
)]
pub async fn home() -> impl IntoResponse {
    StatusCode::OK
}
