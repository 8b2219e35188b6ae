use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value as JsonValue;

use crate::dto::respuesta::Respuesta;
use crate::schemas::llamada_schema;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_llamadas(State(state): State<AppState>) -> Respuesta {
    state.llamada_service.list_all().await
}

#[axum::debug_handler]
pub async fn list_terminadas(State(state): State<AppState>) -> Respuesta {
    state.llamada_service.list_by_termino(true).await
}

#[axum::debug_handler]
pub async fn list_pendientes(State(state): State<AppState>) -> Respuesta {
    state.llamada_service.list_by_termino(false).await
}

#[axum::debug_handler]
pub async fn list_promociones(State(state): State<AppState>) -> Respuesta {
    state.llamada_service.list_by_promocion(true).await
}

#[axum::debug_handler]
pub async fn list_rechazos(State(state): State<AppState>) -> Respuesta {
    state.llamada_service.list_by_promocion(false).await
}

#[axum::debug_handler]
pub async fn list_by_nivel(State(state): State<AppState>, Path(nivel): Path<String>) -> Respuesta {
    state.llamada_service.list_by_nivel(&nivel).await
}

#[axum::debug_handler]
pub async fn list_by_entrevistador(
    State(state): State<AppState>,
    Path(entrevistador): Path<String>,
) -> Respuesta {
    state
        .llamada_service
        .list_by_entrevistador(&entrevistador)
        .await
}

#[axum::debug_handler]
pub async fn get_llamada(State(state): State<AppState>, Path(id): Path<String>) -> Respuesta {
    state.llamada_service.get_by_id(&id).await
}

#[axum::debug_handler]
pub async fn create_llamada(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Response {
    if let Err(rejection) = llamada_schema::validate_create(&body) {
        return rejection.into_response();
    }
    state.llamada_service.create(&body).await.into_response()
}

#[axum::debug_handler]
pub async fn update_llamada(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<JsonValue>,
) -> Response {
    if let Err(rejection) = llamada_schema::validate_update(&body) {
        return rejection.into_response();
    }
    state.llamada_service.update(&id, &body).await.into_response()
}

#[axum::debug_handler]
pub async fn delete_llamada(State(state): State<AppState>, Path(id): Path<String>) -> Respuesta {
    state.llamada_service.delete(&id).await
}

#[axum::debug_handler]
pub async fn mark_terminada(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<JsonValue>>,
) -> Respuesta {
    let body = body.map(|Json(value)| value).unwrap_or(JsonValue::Null);
    state.llamada_service.mark_terminada(&id, &body).await
}
