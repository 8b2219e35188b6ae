use serde_json::Value as JsonValue;

use crate::dto::coerce_telefono;
use crate::models::candidato::EstadoCandidato;
use crate::utils::validation::{is_valid_email, is_valid_fecha, is_valid_hora};

use super::{check, is_boolean_like, FieldError, SchemaRejection};

pub fn validate_create(body: &JsonValue) -> Result<(), SchemaRejection> {
    let mut errores = Vec::new();

    if !has_text(body, "nombre") {
        errores.push(FieldError::new("nombre", "El nombre es requerido"));
    }
    if !has_text(body, "apellido_paterno") {
        errores.push(FieldError::new(
            "apellido_paterno",
            "El apellido paterno es requerido",
        ));
    }

    match body.get("email").and_then(JsonValue::as_str) {
        None | Some("") => errores.push(FieldError::new("email", "El email es requerido")),
        Some(email) if !is_valid_email(email) => {
            errores.push(FieldError::new("email", "El email no tiene un formato válido"));
        }
        Some(_) => {}
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

    if let Some(estado) = body.get("estado") {
        let valido = estado
            .as_str()
            .and_then(EstadoCandidato::from_param)
            .is_some();
        if !valido {
            errores.push(FieldError::new("estado", "Estado inválido"));
        }
    }

    check_fecha(body, &mut errores);
    check_hora(body, &mut errores);
    check_llamar_ahora(body, &mut errores);

    check(errores)
}

pub fn validate_update(body: &JsonValue) -> Result<(), SchemaRejection> {
    let mut errores = Vec::new();

    if let Some(email) = body.get("email") {
        match email.as_str() {
            None | Some("") => {
                errores.push(FieldError::new("email", "El email no puede estar vacío"));
            }
            Some(value) if !is_valid_email(value) => {
                errores.push(FieldError::new("email", "El email no tiene un formato válido"));
            }
            Some(_) => {}
        }
    }

    if let Some(estado) = body.get("estado") {
        let valido = estado
            .as_str()
            .and_then(EstadoCandidato::from_param)
            .is_some();
        if !valido {
            errores.push(FieldError::new("estado", "Estado inválido"));
        }
    }

    check_fecha(body, &mut errores);
    check_hora(body, &mut errores);
    check_llamar_ahora(body, &mut errores);

    // At least one updatable field must be present.
    const CAMPOS: [&str; 5] = ["email", "telefono", "fecha", "hora", "llamar_ahora"];
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

fn check_fecha(body: &JsonValue, errores: &mut Vec<FieldError>) {
    if let Some(fecha) = body.get("fecha") {
        let aceptable = match fecha {
            JsonValue::Null => true,
            JsonValue::String(s) => s.is_empty() || is_valid_fecha(s),
            _ => false,
        };
        if !aceptable {
            errores.push(FieldError::new(
                "fecha",
                "La fecha debe tener el formato YYYY-MM-DD",
            ));
        }
    }
}

fn check_hora(body: &JsonValue, errores: &mut Vec<FieldError>) {
    if let Some(hora) = body.get("hora") {
        let aceptable = match hora {
            JsonValue::Null => true,
            JsonValue::String(s) => s.is_empty() || is_valid_hora(s),
            _ => false,
        };
        if !aceptable {
            errores.push(FieldError::new(
                "hora",
                "La hora debe tener el formato HH:MM o HH:MM:SS",
            ));
        }
    }
}

fn check_llamar_ahora(body: &JsonValue, errores: &mut Vec<FieldError>) {
    if let Some(llamar_ahora) = body.get("llamar_ahora") {
        if !is_boolean_like(llamar_ahora) {
            errores.push(FieldError::new(
                "llamar_ahora",
                "llamar_ahora debe ser un valor booleano",
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
        assert!(campos.contains(&"apellido_paterno".to_string()));
        assert!(campos.contains(&"email".to_string()));
        assert!(campos.contains(&"telefono".to_string()));
    }

    #[test]
    fn create_accepts_minimal_valid_body() {
        let body = json!({
            "nombre": "Ana",
            "apellido_paterno": "López",
            "email": "ana@example.com",
            "telefono": "(555) 123-4567"
        });
        assert!(validate_create(&body).is_ok());
    }

    #[test]
    fn create_rejects_bad_email_and_estado() {
        let body = json!({
            "nombre": "Ana",
            "apellido_paterno": "López",
            "email": "sin-arroba",
            "telefono": "5551234567",
            "estado": "contratado"
        });
        let campos = fields(validate_create(&body));
        assert!(campos.contains(&"email".to_string()));
        assert!(campos.contains(&"estado".to_string()));
    }

    #[test]
    fn create_rejects_phone_without_digits() {
        let body = json!({
            "nombre": "Ana",
            "apellido_paterno": "López",
            "email": "ana@example.com",
            "telefono": "()- "
        });
        assert!(fields(validate_create(&body)).contains(&"telefono".to_string()));
    }

    #[test]
    fn create_checks_fecha_and_hora_patterns_but_allows_empty() {
        let malformed = json!({
            "nombre": "Ana",
            "apellido_paterno": "López",
            "email": "ana@example.com",
            "telefono": "5551234567",
            "fecha": "2024-1-2",
            "hora": "25:00"
        });
        let campos = fields(validate_create(&malformed));
        assert!(campos.contains(&"fecha".to_string()));
        assert!(campos.contains(&"hora".to_string()));

        let cleared = json!({
            "nombre": "Ana",
            "apellido_paterno": "López",
            "email": "ana@example.com",
            "telefono": "5551234567",
            "fecha": "",
            "hora": null
        });
        assert!(validate_create(&cleared).is_ok());
    }

    #[test]
    fn update_requires_at_least_one_field() {
        let rejection = validate_update(&json!({})).unwrap_err();
        assert_eq!(rejection.mensaje, "Datos de entrada inválidos");
        assert_eq!(
            rejection.errores[0].message,
            "Debe proporcionar al menos un campo para actualizar"
        );
    }

    #[test]
    fn update_accepts_single_field() {
        assert!(validate_update(&json!({"llamar_ahora": "true"})).is_ok());
        assert!(validate_update(&json!({"fecha": null})).is_ok());
    }

    #[test]
    fn update_validates_email_when_present() {
        let campos = fields(validate_update(&json!({"email": "roto"})));
        assert_eq!(campos, vec!["email".to_string()]);
    }
}
