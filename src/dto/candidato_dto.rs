use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::candidato::{Candidato, EstadoCandidato};
use crate::utils::time::to_iso8601;

use super::{coerce_bool, coerce_telefono, text_field};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrearCandidatoDto {
    pub nombre: String,
    pub segundo_nombre: Option<String>,
    pub apellido_paterno: String,
    pub apellido_materno: Option<String>,
    pub email: String,
    pub telefono: i64,
    pub estado: EstadoCandidato,
    pub fecha: Option<NaiveDate>,
    pub hora: Option<String>,
    pub llamar_ahora: bool,
}

/// Update intent: `None` means the field was absent from the request body.
/// For the clearable fields the inner `Option` distinguishes "set to a
/// value" from "explicitly cleared" (null or empty string in the body).
#[derive(Debug, Clone, Default)]
pub struct ActualizarCandidatoDto {
    pub nombre: Option<String>,
    pub segundo_nombre: Option<Option<String>>,
    pub apellido_paterno: Option<String>,
    pub apellido_materno: Option<Option<String>>,
    pub email: Option<String>,
    pub telefono: Option<i64>,
    pub estado: Option<EstadoCandidato>,
    pub fecha: Option<Option<NaiveDate>>,
    pub hora: Option<Option<String>>,
    pub llamar_ahora: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatoResponse {
    pub id: i64,
    pub created_at: String,
    pub nombre: String,
    pub segundo_nombre: Option<String>,
    pub apellido_paterno: String,
    pub apellido_materno: Option<String>,
    pub email: String,
    pub telefono: i64,
    pub estado: EstadoCandidato,
    pub fecha: Option<NaiveDate>,
    pub hora: Option<String>,
    pub llamar_ahora: bool,
    pub nombre_completo: String,
}

pub struct CandidatoMapper;

impl CandidatoMapper {
    pub fn from_create_request(body: &JsonValue) -> CrearCandidatoDto {
        CrearCandidatoDto {
            nombre: text_field(body, "nombre").unwrap_or_default(),
            segundo_nombre: text_field(body, "segundo_nombre"),
            apellido_paterno: text_field(body, "apellido_paterno").unwrap_or_default(),
            apellido_materno: text_field(body, "apellido_materno"),
            email: text_field(body, "email").unwrap_or_default(),
            telefono: body
                .get("telefono")
                .and_then(coerce_telefono)
                .unwrap_or_default(),
            estado: body
                .get("estado")
                .and_then(JsonValue::as_str)
                .and_then(EstadoCandidato::from_param)
                .unwrap_or(EstadoCandidato::Enrolamiento),
            fecha: body.get("fecha").and_then(parse_fecha),
            hora: body.get("hora").and_then(non_empty_text),
            llamar_ahora: body.get("llamar_ahora").map(coerce_bool).unwrap_or(false),
        }
    }

    // Presence in the body is the trigger; for the clearable fields null
    // and '' both map to "clear".
    pub fn from_update_request(body: &JsonValue) -> ActualizarCandidatoDto {
        ActualizarCandidatoDto {
            nombre: text_field(body, "nombre"),
            segundo_nombre: body
                .get("segundo_nombre")
                .map(|v| v.as_str().map(str::to_string)),
            apellido_paterno: text_field(body, "apellido_paterno"),
            apellido_materno: body
                .get("apellido_materno")
                .map(|v| v.as_str().map(str::to_string)),
            email: text_field(body, "email"),
            telefono: body.get("telefono").and_then(coerce_telefono),
            estado: body
                .get("estado")
                .and_then(JsonValue::as_str)
                .and_then(EstadoCandidato::from_param),
            fecha: body.get("fecha").map(parse_fecha),
            hora: body.get("hora").map(non_empty_text),
            llamar_ahora: body.get("llamar_ahora").map(coerce_bool),
        }
    }

    pub fn apply_updates(candidato: &mut Candidato, dto: &ActualizarCandidatoDto) {
        if let Some(nombre) = &dto.nombre {
            candidato.nombre = nombre.clone();
        }
        if let Some(segundo_nombre) = &dto.segundo_nombre {
            candidato.segundo_nombre = segundo_nombre.clone();
        }
        if let Some(apellido_paterno) = &dto.apellido_paterno {
            candidato.apellido_paterno = apellido_paterno.clone();
        }
        if let Some(apellido_materno) = &dto.apellido_materno {
            candidato.apellido_materno = apellido_materno.clone();
        }
        if let Some(email) = &dto.email {
            candidato.email = email.clone();
        }
        if let Some(telefono) = dto.telefono {
            candidato.telefono = telefono;
        }
        if let Some(estado) = dto.estado {
            candidato.estado = estado;
        }
        if let Some(fecha) = dto.fecha {
            candidato.fecha = fecha;
        }
        if let Some(hora) = &dto.hora {
            candidato.hora = hora.clone();
        }
        if let Some(llamar_ahora) = dto.llamar_ahora {
            candidato.llamar_ahora = llamar_ahora;
        }
    }

    pub fn to_response(candidato: &Candidato) -> CandidatoResponse {
        let mut nombre_completo = candidato.nombre.clone();
        if let Some(segundo) = candidato
            .segundo_nombre
            .as_deref()
            .filter(|s| !s.is_empty())
        {
            nombre_completo.push(' ');
            nombre_completo.push_str(segundo);
        }
        nombre_completo.push(' ');
        nombre_completo.push_str(&candidato.apellido_paterno);
        if let Some(materno) = candidato
            .apellido_materno
            .as_deref()
            .filter(|s| !s.is_empty())
        {
            nombre_completo.push(' ');
            nombre_completo.push_str(materno);
        }

        CandidatoResponse {
            id: candidato.id,
            created_at: candidato.created_at.map(to_iso8601).unwrap_or_default(),
            nombre: candidato.nombre.clone(),
            segundo_nombre: candidato.segundo_nombre.clone(),
            apellido_paterno: candidato.apellido_paterno.clone(),
            apellido_materno: candidato.apellido_materno.clone(),
            email: candidato.email.clone(),
            telefono: candidato.telefono,
            estado: candidato.estado,
            fecha: candidato.fecha,
            hora: candidato.hora.clone(),
            llamar_ahora: candidato.llamar_ahora,
            nombre_completo,
        }
    }

    pub fn to_response_list(candidatos: &[Candidato]) -> Vec<CandidatoResponse> {
        candidatos.iter().map(Self::to_response).collect()
    }
}

fn parse_fecha(value: &JsonValue) -> Option<NaiveDate> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

fn non_empty_text(value: &JsonValue) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use serde_json::json;

    fn candidato_base() -> Candidato {
        Candidato {
            id: 7,
            nombre: "Juan".to_string(),
            segundo_nombre: None,
            apellido_paterno: "Pérez".to_string(),
            apellido_materno: Some("Gómez".to_string()),
            email: "juan@example.com".to_string(),
            telefono: 5551234567,
            estado: EstadoCandidato::Enrolamiento,
            fecha: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            hora: Some("10:30".to_string()),
            llamar_ahora: false,
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn create_defaults_estado_to_enrolamiento() {
        let body = json!({
            "nombre": "Ana",
            "apellido_paterno": "López",
            "email": "ana@example.com",
            "telefono": "5551234567"
        });
        let dto = CandidatoMapper::from_create_request(&body);
        assert_eq!(dto.estado, EstadoCandidato::Enrolamiento);
        assert!(!dto.llamar_ahora);
        assert_eq!(dto.fecha, None);
        assert_eq!(dto.hora, None);
    }

    #[test]
    fn create_strips_phone_punctuation() {
        let body = json!({
            "nombre": "Ana",
            "apellido_paterno": "López",
            "email": "ana@example.com",
            "telefono": "(555) 123-4567"
        });
        let dto = CandidatoMapper::from_create_request(&body);
        assert_eq!(dto.telefono, 5551234567);
    }

    #[test]
    fn create_passes_numeric_phone_through() {
        let body = json!({"nombre": "Ana", "apellido_paterno": "López", "email": "a@b.com", "telefono": 5512345678i64});
        let dto = CandidatoMapper::from_create_request(&body);
        assert_eq!(dto.telefono, 5512345678);
    }

    #[test]
    fn create_coerces_llamar_ahora_strings() {
        let truthy = json!({"nombre": "A", "apellido_paterno": "B", "email": "a@b.com", "telefono": "5", "llamar_ahora": "true"});
        assert!(CandidatoMapper::from_create_request(&truthy).llamar_ahora);

        let falsy = json!({"nombre": "A", "apellido_paterno": "B", "email": "a@b.com", "telefono": "5", "llamar_ahora": "yes"});
        assert!(!CandidatoMapper::from_create_request(&falsy).llamar_ahora);
    }

    #[test]
    fn create_treats_empty_fecha_as_null() {
        let body = json!({"nombre": "A", "apellido_paterno": "B", "email": "a@b.com", "telefono": "5", "fecha": "", "hora": ""});
        let dto = CandidatoMapper::from_create_request(&body);
        assert_eq!(dto.fecha, None);
        assert_eq!(dto.hora, None);
    }

    #[test]
    fn update_ignores_absent_fields() {
        let dto = CandidatoMapper::from_update_request(&json!({"email": "nuevo@example.com"}));
        let mut candidato = candidato_base();
        CandidatoMapper::apply_updates(&mut candidato, &dto);
        assert_eq!(candidato.email, "nuevo@example.com");
        assert_eq!(candidato.nombre, "Juan");
        assert_eq!(candidato.hora.as_deref(), Some("10:30"));
    }

    #[test]
    fn update_with_null_fecha_clears_it() {
        let dto = CandidatoMapper::from_update_request(&json!({"fecha": null, "hora": ""}));
        assert_eq!(dto.fecha, Some(None));
        assert_eq!(dto.hora, Some(None));

        let mut candidato = candidato_base();
        CandidatoMapper::apply_updates(&mut candidato, &dto);
        assert_eq!(candidato.fecha, None);
        assert_eq!(candidato.hora, None);
    }

    #[test]
    fn update_coerces_phone_when_present() {
        let dto = CandidatoMapper::from_update_request(&json!({"telefono": "(55) 5123-4567"}));
        assert_eq!(dto.telefono, Some(5551234567));

        let absent = CandidatoMapper::from_update_request(&json!({"email": "a@b.com"}));
        assert_eq!(absent.telefono, None);
    }

    #[test]
    fn response_builds_nombre_completo_skipping_missing_parts() {
        let candidato = candidato_base();
        let response = CandidatoMapper::to_response(&candidato);
        assert_eq!(response.nombre_completo, "Juan Pérez Gómez");

        let mut con_segundo = candidato_base();
        con_segundo.segundo_nombre = Some("Carlos".to_string());
        let response = CandidatoMapper::to_response(&con_segundo);
        assert_eq!(response.nombre_completo, "Juan Carlos Pérez Gómez");

        let mut sin_materno = candidato_base();
        sin_materno.apellido_materno = None;
        let response = CandidatoMapper::to_response(&sin_materno);
        assert_eq!(response.nombre_completo, "Juan Pérez");
    }

    #[test]
    fn response_formats_created_at_as_iso8601() {
        let response = CandidatoMapper::to_response(&candidato_base());
        assert_eq!(response.created_at, "2024-01-01T00:00:00.000Z");
    }
}
