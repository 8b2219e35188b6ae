use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Uniform response envelope. Success carries a `data` key, failure an
/// `error` key; the wire status code always comes from the `status` field.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Respuesta {
    Exito {
        status: u16,
        message: String,
        data: JsonValue,
    },
    Fallo {
        status: u16,
        message: String,
        error: JsonValue,
    },
}

impl Respuesta {
    pub fn exito<T: Serialize>(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Respuesta::Exito {
            status: status.as_u16(),
            message: message.into(),
            data: serde_json::to_value(data).unwrap_or(JsonValue::Null),
        }
    }

    pub fn fallo(status: StatusCode, message: impl Into<String>, error: Option<String>) -> Self {
        Respuesta::Fallo {
            status: status.as_u16(),
            message: message.into(),
            error: error.map(JsonValue::String).unwrap_or(JsonValue::Null),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Respuesta::Exito { status, .. } | Respuesta::Fallo { status, .. } => *status,
        }
    }
}

impl IntoResponse for Respuesta {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exito_serializes_with_data_key() {
        let respuesta = Respuesta::exito(StatusCode::OK, "todo bien", json!({"id": 1}));
        let value = serde_json::to_value(&respuesta).unwrap();
        assert_eq!(value["status"], 200);
        assert_eq!(value["message"], "todo bien");
        assert_eq!(value["data"]["id"], 1);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn exito_admits_null_data() {
        let respuesta = Respuesta::exito(StatusCode::OK, "eliminado", JsonValue::Null);
        let value = serde_json::to_value(&respuesta).unwrap();
        assert!(value.get("data").is_some());
        assert_eq!(value["data"], JsonValue::Null);
    }

    #[test]
    fn fallo_serializes_with_error_key() {
        let respuesta = Respuesta::fallo(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error al crear candidato",
            Some("connection refused".to_string()),
        );
        let value = serde_json::to_value(&respuesta).unwrap();
        assert_eq!(value["status"], 500);
        assert_eq!(value["error"], "connection refused");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn fallo_without_detail_keeps_null_error() {
        let respuesta = Respuesta::fallo(StatusCode::BAD_REQUEST, "ID inválido", None);
        let value = serde_json::to_value(&respuesta).unwrap();
        assert_eq!(value["status"], 400);
        assert_eq!(value["error"], JsonValue::Null);
    }
}
