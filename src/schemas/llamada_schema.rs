use serde_json::Value as JsonValue;

use crate::dto::coerce_telefono;

use super::{check, is_boolean_like, FieldError, SchemaRejection};

const TEXTOS_OPCIONALES: [&str; 4] = ["resumen", "conocimiento", "personalidad", "transcripcion"];

pub fn validate_create(body: &JsonValue) -> Result<(), SchemaRejection> {
    let mut errores = Vec::new();

    if !has_text(body, "nombre") {
        errores.push(FieldError::new("nombre", "El nombre es requerido"));
    }
    if !has_text(body, "entrevistador") {
        errores.push(FieldError::new(
            "entrevistador",
            "El entrevistador es requerido",
        ));
    }
    if !has_text(body, "nivel") {
        errores.push(FieldError::new("nivel", "El nivel es requerido"));
    }

    match body.get("telefono") {
        None | Some(JsonValue::Null) => {
            errores.push(FieldError::new("telefono", "El teléfono es requerido"));
        }
        Some(value) if coerce_telefono(value).is_none() => {
            errores.push(FieldError::new(
                "telefono",
                "El teléfono debe ser un número o una cadena con formato de teléfono",
            ));
        }
        Some(_) => {}
    }

    check_optional_texts(body, &mut errores);
    check_flag(body, "promocion", &mut errores);
    check_flag(body, "termino", &mut errores);

    check(errores)
}

pub fn validate_update(body: &JsonValue) -> Result<(), SchemaRejection> {
    let mut errores = Vec::new();

    if let Some(nombre) = body.get("nombre") {
        if !is_non_empty_string(nombre) {
            errores.push(FieldError::new("nombre", "El nombre no puede estar vacío"));
        }
    }
    if let Some(entrevistador) = body.get("entrevistador") {
        if !is_non_empty_string(entrevistador) {
            errores.push(FieldError::new(
                "entrevistador",
                "El entrevistador no puede estar vacío",
            ));
        }
    }
    if let Some(nivel) = body.get("nivel") {
        if !is_non_empty_string(nivel) {
            errores.push(FieldError::new("nivel", "El nivel no puede estar vacío"));
        }
    }

    // On update the phone must already be numeric; the create-style string
    // coercion does not apply here.
    if let Some(telefono) = body.get("telefono") {
        if !telefono.is_i64() {
            errores.push(FieldError::new("telefono", "El teléfono debe ser un número"));
        }
    }

    check_optional_texts(body, &mut errores);
    check_flag(body, "promocion", &mut errores);
    check_flag(body, "termino", &mut errores);

    const CAMPOS: [&str; 10] = [
        "nombre",
        "entrevistador",
        "nivel",
        "promocion",
        "resumen",
        "conocimiento",
        "telefono",
        "personalidad",
        "transcripcion",
        "termino",
    ];
    if !CAMPOS.iter().any(|campo| body.get(*campo).is_some()) {
        errores.push(FieldError::new(
            "",
            "Debe proporcionar al menos un campo para actualizar",
        ));
    }

    check(errores)
}

fn has_text(body: &JsonValue, field: &str) -> bool {
    body.get(field)
        .and_then(JsonValue::as_str)
        .map(|s| !s.is_empty())
        .unwrap_or(false)
}

fn is_non_empty_string(value: &JsonValue) -> bool {
    value.as_str().map(|s| !s.is_empty()).unwrap_or(false)
}

fn check_optional_texts(body: &JsonValue, errores: &mut Vec<FieldError>) {
    for campo in TEXTOS_OPCIONALES {
        if let Some(value) = body.get(campo) {
            if !value.is_null() && !value.is_string() {
                errores.push(FieldError::new(
                    campo,
                    format!("El campo {} debe ser una cadena de texto", campo),
                ));
            }
        }
    }
}

fn check_flag(body: &JsonValue, campo: &'static str, errores: &mut Vec<FieldError>) {
    if let Some(value) = body.get(campo) {
        if !is_boolean_like(value) {
            errores.push(FieldError::new(
                campo,
                format!("{} debe ser un valor booleano", campo),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(result: Result<(), SchemaRejection>) -> Vec<String> {
        result
            .err()
            .map(|r| r.errores.into_iter().map(|e| e.field).collect())
            .unwrap_or_default()
    }

    #[test]
    fn create_requires_mandatory_fields() {
        let campos = fields(validate_create(&json!({})));
        assert!(campos.contains(&"nombre".to_string()));
        assert!(campos.contains(&"entrevistador".to_string()));
        assert!(campos.contains(&"nivel".to_string()));
        assert!(campos.contains(&"telefono".to_string()));
    }

    #[test]
    fn create_accepts_formatted_phone() {
        let body = json!({
            "nombre": "Ana Torres",
            "entrevistador": "Luis",
            "nivel": "senior",
            "telefono": "(555) 123-4567",
            "promocion": "true"
        });
        assert!(validate_create(&body).is_ok());
    }

    #[test]
    fn create_rejects_non_boolean_flags() {
        let body = json!({
            "nombre": "Ana",
            "entrevistador": "Luis",
            "nivel": "jr",
            "telefono": 5,
            "termino": "quizás"
        });
        assert_eq!(fields(validate_create(&body)), vec!["termino".to_string()]);
    }

    #[test]
    fn update_requires_numeric_phone() {
        let campos = fields(validate_update(&json!({"telefono": "5551234567"})));
        assert_eq!(campos, vec!["telefono".to_string()]);

        assert!(validate_update(&json!({"telefono": 5551234567i64})).is_ok());
    }

    #[test]
    fn update_rejects_empty_required_texts() {
        let campos = fields(validate_update(&json!({"nombre": ""})));
        assert_eq!(campos, vec!["nombre".to_string()]);
    }

    #[test]
    fn update_requires_at_least_one_field() {
        let rejection = validate_update(&json!({"ajeno": 1})).unwrap_err();
        assert_eq!(
            rejection.errores[0].message,
            "Debe proporcionar al menos un campo para actualizar"
        );
    }
}
