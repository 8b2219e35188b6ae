use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    let body = json!({
        "message": "API de Reclutamiento - Gestión de Candidatos",
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
    });
    (StatusCode::OK, Json(body))
}
