use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Llamada {
    pub id: i64,
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
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
