use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value as JsonValue;

use crate::dto::respuesta::Respuesta;
use crate::schemas::candidato_schema;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_candidatos(State(state): State<AppState>) -> Respuesta {
    state.candidato_service.list_all().await
}

#[axum::debug_handler]
pub async fn list_by_estado(
    State(state): State<AppState>,
    Path(estado): Path<String>,
) -> Respuesta {
    state.candidato_service.list_by_estado(&estado).await
}

#[axum::debug_handler]
pub async fn list_pendientes_llamar(State(state): State<AppState>) -> Respuesta {
    state.candidato_service.list_pendientes_llamar_ahora().await
}

#[axum::debug_handler]
pub async fn get_candidato(State(state): State<AppState>, Path(id): Path<String>) -> Respuesta {
    state.candidato_service.get_by_id(&id).await
}

#[axum::debug_handler]
pub async fn create_candidato(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Response {
    if let Err(rejection) = candidato_schema::validate_create(&body) {
        return rejection.into_response();
    }
    state.candidato_service.create(&body).await.into_response()
}

#[axum::debug_handler]
pub async fn update_candidato(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<JsonValue>,
) -> Response {
    if let Err(rejection) = candidato_schema::validate_update(&body) {
        return rejection.into_response();
    }
    state
        .candidato_service
        .update(&id, &body)
        .await
        .into_response()
}

#[axum::debug_handler]
pub async fn delete_candidato(State(state): State<AppState>, Path(id): Path<String>) -> Respuesta {
    state.candidato_service.delete(&id).await
}

#[axum::debug_handler]
pub async fn update_estado(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<JsonValue>>,
) -> Respuesta {
    let body = body.map(|Json(value)| value).unwrap_or(JsonValue::Null);
    state.candidato_service.update_estado(&id, &body).await
}
