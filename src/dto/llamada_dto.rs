use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::llamada::Llamada;
use crate::utils::time::to_iso8601;

use super::{coerce_bool, coerce_telefono, text_field};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrearLlamadaDto {
    pub nombre: String,
    pub entrevistador: String,
    pub nivel: String,
    pub promocion: bool,
    pub resumen: String,
    pub conocimiento: String,
    pub telefono: i64,
    pub personalidad: String,
    pub transcripcion: String,
    pub termino: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlamadaResponse {
    pub id: i64,
    pub created_at: String,
    pub nombre: String,
    pub entrevistador: String,
    pub nivel: String,
    pub promocion: bool,
    pub resumen: String,
    pub conocimiento: String,
    pub telefono: i64,
    pub personalidad: String,
    pub transcripcion: String,
    pub termino: bool,
}

pub struct LlamadaMapper;

impl LlamadaMapper {
    pub fn from_create_request(body: &JsonValue) -> CrearLlamadaDto {
        CrearLlamadaDto {
            nombre: text_field(body, "nombre").unwrap_or_default(),
            entrevistador: text_field(body, "entrevistador").unwrap_or_default(),
            nivel: text_field(body, "nivel").unwrap_or_default(),
            promocion: body.get("promocion").map(coerce_bool).unwrap_or(false),
            resumen: text_field(body, "resumen").unwrap_or_default(),
            conocimiento: text_field(body, "conocimiento").unwrap_or_default(),
            telefono: body
                .get("telefono")
                .and_then(coerce_telefono)
                .unwrap_or_default(),
            personalidad: text_field(body, "personalidad").unwrap_or_default(),
            transcripcion: text_field(body, "transcripcion").unwrap_or_default(),
            termino: body.get("termino").map(coerce_bool).unwrap_or(false),
        }
    }

    // The update path applies the raw body: values are taken at their JSON
    // type, without the string coercions the create path performs. Fields
    // carrying a wrong-typed value are left untouched.
    pub fn apply_updates(llamada: &mut Llamada, body: &JsonValue) {
        if let Some(nombre) = body.get("nombre").and_then(JsonValue::as_str) {
            llamada.nombre = nombre.to_string();
        }
        if let Some(entrevistador) = body.get("entrevistador").and_then(JsonValue::as_str) {
            llamada.entrevistador = entrevistador.to_string();
        }
        if let Some(nivel) = body.get("nivel").and_then(JsonValue::as_str) {
            llamada.nivel = nivel.to_string();
        }
        if let Some(promocion) = body.get("promocion").and_then(JsonValue::as_bool) {
            llamada.promocion = promocion;
        }
        if let Some(resumen) = body.get("resumen").and_then(JsonValue::as_str) {
            llamada.resumen = resumen.to_string();
        }
        if let Some(conocimiento) = body.get("conocimiento").and_then(JsonValue::as_str) {
            llamada.conocimiento = conocimiento.to_string();
        }
        if let Some(telefono) = body.get("telefono").and_then(JsonValue::as_i64) {
            llamada.telefono = telefono;
        }
        if let Some(personalidad) = body.get("personalidad").and_then(JsonValue::as_str) {
            llamada.personalidad = personalidad.to_string();
        }
        if let Some(transcripcion) = body.get("transcripcion").and_then(JsonValue::as_str) {
            llamada.transcripcion = transcripcion.to_string();
        }
        if let Some(termino) = body.get("termino").and_then(JsonValue::as_bool) {
            llamada.termino = termino;
        }
    }

    pub fn to_response(llamada: &Llamada) -> LlamadaResponse {
        LlamadaResponse {
            id: llamada.id,
            created_at: llamada.created_at.map(to_iso8601).unwrap_or_default(),
            nombre: llamada.nombre.clone(),
            entrevistador: llamada.entrevistador.clone(),
            nivel: llamada.nivel.clone(),
            promocion: llamada.promocion,
            resumen: llamada.resumen.clone(),
            conocimiento: llamada.conocimiento.clone(),
            telefono: llamada.telefono,
            personalidad: llamada.personalidad.clone(),
            transcripcion: llamada.transcripcion.clone(),
            termino: llamada.termino,
        }
    }

    pub fn to_response_list(llamadas: &[Llamada]) -> Vec<LlamadaResponse> {
        llamadas.iter().map(Self::to_response).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn llamada_base() -> Llamada {
        Llamada {
            id: 3,
            nombre: "Ana Torres".to_string(),
            entrevistador: "Luis".to_string(),
            nivel: "senior".to_string(),
            promocion: false,
            resumen: "".to_string(),
            conocimiento: "".to_string(),
            telefono: 5551234567,
            personalidad: "".to_string(),
            transcripcion: "".to_string(),
            termino: false,
            created_at: Some(Utc.with_ymd_and_hms(2024, 2, 10, 15, 30, 0).unwrap()),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 2, 10, 15, 30, 0).unwrap()),
        }
    }

    #[test]
    fn create_defaults_optional_text_to_empty_string() {
        let body = json!({
            "nombre": "Ana Torres",
            "entrevistador": "Luis",
            "nivel": "senior",
            "telefono": "555-123-4567"
        });
        let dto = LlamadaMapper::from_create_request(&body);
        assert_eq!(dto.resumen, "");
        assert_eq!(dto.conocimiento, "");
        assert_eq!(dto.personalidad, "");
        assert_eq!(dto.transcripcion, "");
        assert_eq!(dto.telefono, 5551234567);
        assert!(!dto.promocion);
        assert!(!dto.termino);
    }

    #[test]
    fn create_coerces_boolean_strings() {
        let body = json!({
            "nombre": "Ana",
            "entrevistador": "Luis",
            "nivel": "jr",
            "telefono": 5,
            "promocion": "true",
            "termino": "false"
        });
        let dto = LlamadaMapper::from_create_request(&body);
        assert!(dto.promocion);
        assert!(!dto.termino);
    }

    #[test]
    fn update_copies_only_present_fields() {
        let mut llamada = llamada_base();
        LlamadaMapper::apply_updates(&mut llamada, &json!({"resumen": "fue bien"}));
        assert_eq!(llamada.resumen, "fue bien");
        assert_eq!(llamada.nombre, "Ana Torres");
        assert!(!llamada.termino);
    }

    #[test]
    fn update_does_not_coerce_string_booleans() {
        let mut llamada = llamada_base();
        LlamadaMapper::apply_updates(&mut llamada, &json!({"termino": "true"}));
        assert!(!llamada.termino);

        LlamadaMapper::apply_updates(&mut llamada, &json!({"termino": true}));
        assert!(llamada.termino);
    }

    #[test]
    fn update_takes_numeric_phone_only() {
        let mut llamada = llamada_base();
        LlamadaMapper::apply_updates(&mut llamada, &json!({"telefono": "(555) 000-1111"}));
        assert_eq!(llamada.telefono, 5551234567);

        LlamadaMapper::apply_updates(&mut llamada, &json!({"telefono": 5550001111i64}));
        assert_eq!(llamada.telefono, 5550001111);
    }

    #[test]
    fn response_formats_created_at() {
        let response = LlamadaMapper::to_response(&llamada_base());
        assert_eq!(response.created_at, "2024-02-10T15:30:00.000Z");
        assert_eq!(response.telefono, 5551234567);
    }
}
