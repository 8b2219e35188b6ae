pub mod candidato_schema;
pub mod llamada_schema;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// One failed rule of a request-body schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 400 body for schema violations. This is the one response that does not
/// use the standard envelope.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaRejection {
    pub mensaje: String,
    pub errores: Vec<FieldError>,
}

impl SchemaRejection {
    pub fn new(errores: Vec<FieldError>) -> Self {
        Self {
            mensaje: "Datos de entrada inválidos".to_string(),
            errores,
        }
    }
}

impl IntoResponse for SchemaRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

pub(crate) fn check(errores: Vec<FieldError>) -> Result<(), SchemaRejection> {
    if errores.is_empty() {
        Ok(())
    } else {
        Err(SchemaRejection::new(errores))
    }
}

/// Booleans may arrive as JSON booleans or as the strings "true"/"false".
pub(crate) fn is_boolean_like(value: &serde_json::Value) -> bool {
    value.is_boolean() || matches!(value.as_str(), Some("true") | Some("false"))
}
