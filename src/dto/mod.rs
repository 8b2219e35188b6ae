pub mod candidato_dto;
pub mod llamada_dto;
pub mod respuesta;

use serde_json::Value as JsonValue;

pub(crate) fn text_field(body: &JsonValue, field: &str) -> Option<String> {
    body.get(field)
        .and_then(JsonValue::as_str)
        .map(str::to_string)
}

/// Phone values arrive either as a JSON integer or as a formatted string
/// ("(555) 123-4567"); strings keep their digits only before parsing.
pub(crate) fn coerce_telefono(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::String(s) => {
            let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        }
        other => other.as_i64(),
    }
}

/// Boolean flags accept `true` or the literal string "true"; anything else
/// is false.
pub(crate) fn coerce_bool(value: &JsonValue) -> bool {
    value == &JsonValue::Bool(true) || value.as_str() == Some("true")
}
