use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Pipeline status of a candidate. Stored as the `estado_candidato`
/// Postgres enum and serialized with the lowercase Spanish labels the
/// API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "estado_candidato", rename_all = "lowercase")]
pub enum EstadoCandidato {
    Aprobado,
    Enrolamiento,
    Entrevista,
    Llamada,
    Pausado,
    Rechazado,
}

impl EstadoCandidato {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "aprobado" => Some(EstadoCandidato::Aprobado),
            "enrolamiento" => Some(EstadoCandidato::Enrolamiento),
            "entrevista" => Some(EstadoCandidato::Entrevista),
            "llamada" => Some(EstadoCandidato::Llamada),
            "pausado" => Some(EstadoCandidato::Pausado),
            "rechazado" => Some(EstadoCandidato::Rechazado),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoCandidato::Aprobado => "aprobado",
            EstadoCandidato::Enrolamiento => "enrolamiento",
            EstadoCandidato::Entrevista => "entrevista",
            EstadoCandidato::Llamada => "llamada",
            EstadoCandidato::Pausado => "pausado",
            EstadoCandidato::Rechazado => "rechazado",
        }
    }
}

impl std::fmt::Display for EstadoCandidato {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidato {
    pub id: i64,
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
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
