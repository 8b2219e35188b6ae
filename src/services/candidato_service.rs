use axum::http::StatusCode;
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use crate::dto::candidato_dto::CandidatoMapper;
use crate::dto::respuesta::Respuesta;
use crate::models::candidato::{Candidato, EstadoCandidato};
use crate::utils::logging::FailureLog;

const COLUMNAS: &str = "id, nombre, segundo_nombre, apellido_paterno, apellido_materno, email, \
                        telefono, estado, fecha, hora, llamar_ahora, created_at, updated_at";

#[derive(Clone)]
pub struct CandidatoService {
    pool: PgPool,
    log: FailureLog,
}

impl CandidatoService {
    pub fn new(pool: PgPool, log: FailureLog) -> Self {
        Self { pool, log }
    }

    pub async fn list_all(&self) -> Respuesta {
        let query = format!(
            "SELECT {COLUMNAS} FROM candidatos ORDER BY created_at DESC"
        );
        match sqlx::query_as::<_, Candidato>(&query)
            .fetch_all(&self.pool)
            .await
        {
            Ok(candidatos) => Respuesta::exito(
                StatusCode::OK,
                "Candidatos obtenidos con éxito",
                CandidatoMapper::to_response_list(&candidatos),
            ),
            Err(err) => self.db_failure(
                "CandidatoService::list_all",
                "Error al obtener candidatos",
                err,
            ),
        }
    }

    pub async fn list_by_estado(&self, estado_param: &str) -> Respuesta {
        let Some(estado) = EstadoCandidato::from_param(estado_param) else {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "Estado inválido", None);
        };

        let query = format!(
            "SELECT {COLUMNAS} FROM candidatos WHERE estado = $1 ORDER BY created_at DESC"
        );
        match sqlx::query_as::<_, Candidato>(&query)
            .bind(estado)
            .fetch_all(&self.pool)
            .await
        {
            Ok(candidatos) => Respuesta::exito(
                StatusCode::OK,
                format!("Candidatos con estado {} obtenidos con éxito", estado),
                CandidatoMapper::to_response_list(&candidatos),
            ),
            Err(err) => self.db_failure(
                "CandidatoService::list_by_estado",
                "Error al obtener candidatos por estado",
                err,
            ),
        }
    }

    pub async fn list_pendientes_llamar_ahora(&self) -> Respuesta {
        let query = format!(
            "SELECT {COLUMNAS} FROM candidatos WHERE estado = $1 AND llamar_ahora = TRUE"
        );
        match sqlx::query_as::<_, Candidato>(&query)
            .bind(EstadoCandidato::Llamada)
            .fetch_all(&self.pool)
            .await
        {
            Ok(candidatos) => Respuesta::exito(
                StatusCode::OK,
                "Candidatos pendientes para llamar hoy obtenidos con éxito",
                CandidatoMapper::to_response_list(&candidatos),
            ),
            Err(err) => self.db_failure(
                "CandidatoService::list_pendientes_llamar_ahora",
                "Error al obtener candidatos pendientes",
                err,
            ),
        }
    }

    pub async fn get_by_id(&self, id_param: &str) -> Respuesta {
        let Ok(id) = id_param.parse::<i64>() else {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "ID inválido", None);
        };

        match self.fetch_candidato(id).await {
            Ok(Some(candidato)) => Respuesta::exito(
                StatusCode::OK,
                "Candidato obtenido con éxito",
                CandidatoMapper::to_response(&candidato),
            ),
            Ok(None) => Respuesta::fallo(StatusCode::NOT_FOUND, "Candidato no encontrado", None),
            Err(err) => self.db_failure(
                "CandidatoService::get_by_id",
                "Error al obtener candidato",
                err,
            ),
        }
    }

    pub async fn create(&self, body: &JsonValue) -> Respuesta {
        let dto = CandidatoMapper::from_create_request(body);

        let query = format!(
            "INSERT INTO candidatos (nombre, segundo_nombre, apellido_paterno, apellido_materno, \
             email, telefono, estado, fecha, hora, llamar_ahora) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNAS}"
        );
        match sqlx::query_as::<_, Candidato>(&query)
            .bind(&dto.nombre)
            .bind(&dto.segundo_nombre)
            .bind(&dto.apellido_paterno)
            .bind(&dto.apellido_materno)
            .bind(&dto.email)
            .bind(dto.telefono)
            .bind(dto.estado)
            .bind(dto.fecha)
            .bind(&dto.hora)
            .bind(dto.llamar_ahora)
            .fetch_one(&self.pool)
            .await
        {
            Ok(candidato) => Respuesta::exito(
                StatusCode::CREATED,
                "Candidato creado con éxito",
                CandidatoMapper::to_response(&candidato),
            ),
            Err(err) => self.db_failure("CandidatoService::create", "Error al crear candidato", err),
        }
    }

    pub async fn update(&self, id_param: &str, body: &JsonValue) -> Respuesta {
        let Ok(id) = id_param.parse::<i64>() else {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "ID inválido", None);
        };

        let mut candidato = match self.fetch_candidato(id).await {
            Ok(Some(candidato)) => candidato,
            Ok(None) => {
                return Respuesta::fallo(StatusCode::NOT_FOUND, "Candidato no encontrado", None)
            }
            Err(err) => {
                return self.db_failure(
                    "CandidatoService::update",
                    "Error al actualizar candidato",
                    err,
                )
            }
        };

        let dto = CandidatoMapper::from_update_request(body);
        CandidatoMapper::apply_updates(&mut candidato, &dto);

        match self.persist_candidato(&candidato).await {
            Ok(actualizado) => Respuesta::exito(
                StatusCode::OK,
                "Candidato actualizado con éxito",
                CandidatoMapper::to_response(&actualizado),
            ),
            Err(err) => self.db_failure(
                "CandidatoService::update",
                "Error al actualizar candidato",
                err,
            ),
        }
    }

    pub async fn delete(&self, id_param: &str) -> Respuesta {
        let Ok(id) = id_param.parse::<i64>() else {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "ID inválido", None);
        };

        match self.fetch_candidato(id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Respuesta::fallo(StatusCode::NOT_FOUND, "Candidato no encontrado", None)
            }
            Err(err) => {
                return self.db_failure(
                    "CandidatoService::delete",
                    "Error al eliminar candidato",
                    err,
                )
            }
        }

        match sqlx::query("DELETE FROM candidatos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(_) => Respuesta::exito(
                StatusCode::OK,
                "Candidato eliminado con éxito",
                JsonValue::Null,
            ),
            Err(err) => self.db_failure(
                "CandidatoService::delete",
                "Error al eliminar candidato",
                err,
            ),
        }
    }

    pub async fn update_estado(&self, id_param: &str, body: &JsonValue) -> Respuesta {
        let Ok(id) = id_param.parse::<i64>() else {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "ID inválido", None);
        };

        let Some(estado) = body
            .get("estado")
            .and_then(JsonValue::as_str)
            .and_then(EstadoCandidato::from_param)
        else {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "Estado inválido", None);
        };

        match self.fetch_candidato(id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Respuesta::fallo(StatusCode::NOT_FOUND, "Candidato no encontrado", None)
            }
            Err(err) => {
                return self.db_failure(
                    "CandidatoService::update_estado",
                    "Error al actualizar estado del candidato",
                    err,
                )
            }
        }

        let query = format!(
            "UPDATE candidatos SET estado = $2, updated_at = NOW() WHERE id = $1 \
             RETURNING {COLUMNAS}"
        );
        match sqlx::query_as::<_, Candidato>(&query)
            .bind(id)
            .bind(estado)
            .fetch_one(&self.pool)
            .await
        {
            Ok(candidato) => Respuesta::exito(
                StatusCode::OK,
                "Estado del candidato actualizado con éxito",
                CandidatoMapper::to_response(&candidato),
            ),
            Err(err) => self.db_failure(
                "CandidatoService::update_estado",
                "Error al actualizar estado del candidato",
                err,
            ),
        }
    }

    async fn fetch_candidato(&self, id: i64) -> Result<Option<Candidato>, sqlx::Error> {
        let query = format!("SELECT {COLUMNAS} FROM candidatos WHERE id = $1");
        sqlx::query_as::<_, Candidato>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn persist_candidato(&self, candidato: &Candidato) -> Result<Candidato, sqlx::Error> {
        let query = format!(
            "UPDATE candidatos SET nombre = $2, segundo_nombre = $3, apellido_paterno = $4, \
             apellido_materno = $5, email = $6, telefono = $7, estado = $8, fecha = $9, \
             hora = $10, llamar_ahora = $11, updated_at = NOW() WHERE id = $1 \
             RETURNING {COLUMNAS}"
        );
        sqlx::query_as::<_, Candidato>(&query)
            .bind(candidato.id)
            .bind(&candidato.nombre)
            .bind(&candidato.segundo_nombre)
            .bind(&candidato.apellido_paterno)
            .bind(&candidato.apellido_materno)
            .bind(&candidato.email)
            .bind(candidato.telefono)
            .bind(candidato.estado)
            .bind(candidato.fecha)
            .bind(&candidato.hora)
            .bind(candidato.llamar_ahora)
            .fetch_one(&self.pool)
            .await
    }

    fn db_failure(&self, operation: &'static str, message: &str, err: sqlx::Error) -> Respuesta {
        self.log.persistence_failure(operation, &err);
        Respuesta::fallo(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            Some(err.to_string()),
        )
    }
}
