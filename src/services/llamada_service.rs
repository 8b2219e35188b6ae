use axum::http::StatusCode;
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use crate::dto::llamada_dto::LlamadaMapper;
use crate::dto::respuesta::Respuesta;
use crate::models::llamada::Llamada;
use crate::utils::logging::FailureLog;

const COLUMNAS: &str = "id, nombre, entrevistador, nivel, promocion, resumen, conocimiento, \
                        telefono, personalidad, transcripcion, termino, created_at, updated_at";

#[derive(Clone)]
pub struct LlamadaService {
    pool: PgPool,
    log: FailureLog,
}

impl LlamadaService {
    pub fn new(pool: PgPool, log: FailureLog) -> Self {
        Self { pool, log }
    }

    pub async fn list_all(&self) -> Respuesta {
        let query = format!("SELECT {COLUMNAS} FROM llamadas ORDER BY created_at DESC");
        match sqlx::query_as::<_, Llamada>(&query)
            .fetch_all(&self.pool)
            .await
        {
            Ok(llamadas) => Respuesta::exito(
                StatusCode::OK,
                "Llamadas obtenidas con éxito",
                LlamadaMapper::to_response_list(&llamadas),
            ),
            Err(err) => {
                self.db_failure("LlamadaService::list_all", "Error al obtener llamadas", err)
            }
        }
    }

    pub async fn list_by_termino(&self, termino: bool) -> Respuesta {
        let query = format!(
            "SELECT {COLUMNAS} FROM llamadas WHERE termino = $1 ORDER BY created_at DESC"
        );
        match sqlx::query_as::<_, Llamada>(&query)
            .bind(termino)
            .fetch_all(&self.pool)
            .await
        {
            Ok(llamadas) => Respuesta::exito(
                StatusCode::OK,
                format!(
                    "Llamadas {} obtenidas con éxito",
                    if termino { "terminadas" } else { "pendientes" }
                ),
                LlamadaMapper::to_response_list(&llamadas),
            ),
            Err(err) => self.db_failure(
                "LlamadaService::list_by_termino",
                "Error al obtener llamadas por término",
                err,
            ),
        }
    }

    pub async fn list_by_promocion(&self, promocion: bool) -> Respuesta {
        let query = format!(
            "SELECT {COLUMNAS} FROM llamadas WHERE promocion = $1 ORDER BY created_at DESC"
        );
        match sqlx::query_as::<_, Llamada>(&query)
            .bind(promocion)
            .fetch_all(&self.pool)
            .await
        {
            Ok(llamadas) => Respuesta::exito(
                StatusCode::OK,
                format!(
                    "Llamadas {} obtenidas con éxito",
                    if promocion { "promovidas" } else { "no promovidas" }
                ),
                LlamadaMapper::to_response_list(&llamadas),
            ),
            Err(err) => self.db_failure(
                "LlamadaService::list_by_promocion",
                "Error al obtener llamadas por promocion",
                err,
            ),
        }
    }

    pub async fn list_by_nivel(&self, nivel: &str) -> Respuesta {
        if nivel.is_empty() {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "Nivel requerido", None);
        }

        let query = format!(
            "SELECT {COLUMNAS} FROM llamadas WHERE nivel = $1 ORDER BY created_at DESC"
        );
        match sqlx::query_as::<_, Llamada>(&query)
            .bind(nivel)
            .fetch_all(&self.pool)
            .await
        {
            Ok(llamadas) => Respuesta::exito(
                StatusCode::OK,
                format!("Llamadas de nivel {} obtenidas con éxito", nivel),
                LlamadaMapper::to_response_list(&llamadas),
            ),
            Err(err) => self.db_failure(
                "LlamadaService::list_by_nivel",
                "Error al obtener llamadas por nivel",
                err,
            ),
        }
    }

    pub async fn list_by_entrevistador(&self, entrevistador: &str) -> Respuesta {
        if entrevistador.is_empty() {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "Entrevistador requerido", None);
        }

        let query = format!(
            "SELECT {COLUMNAS} FROM llamadas WHERE entrevistador = $1 ORDER BY created_at DESC"
        );
        match sqlx::query_as::<_, Llamada>(&query)
            .bind(entrevistador)
            .fetch_all(&self.pool)
            .await
        {
            Ok(llamadas) => Respuesta::exito(
                StatusCode::OK,
                format!(
                    "Llamadas del entrevistador {} obtenidas con éxito",
                    entrevistador
                ),
                LlamadaMapper::to_response_list(&llamadas),
            ),
            Err(err) => self.db_failure(
                "LlamadaService::list_by_entrevistador",
                "Error al obtener llamadas por entrevistador",
                err,
            ),
        }
    }

    pub async fn get_by_id(&self, id_param: &str) -> Respuesta {
        let Ok(id) = id_param.parse::<i64>() else {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "ID inválido", None);
        };

        match self.fetch_llamada(id).await {
            Ok(Some(llamada)) => Respuesta::exito(
                StatusCode::OK,
                "Llamada obtenida con éxito",
                LlamadaMapper::to_response(&llamada),
            ),
            Ok(None) => Respuesta::fallo(StatusCode::NOT_FOUND, "Llamada no encontrada", None),
            Err(err) => {
                self.db_failure("LlamadaService::get_by_id", "Error al obtener llamada", err)
            }
        }
    }

    pub async fn create(&self, body: &JsonValue) -> Respuesta {
        let dto = LlamadaMapper::from_create_request(body);

        let query = format!(
            "INSERT INTO llamadas (nombre, entrevistador, nivel, promocion, resumen, \
             conocimiento, telefono, personalidad, transcripcion, termino) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNAS}"
        );
        match sqlx::query_as::<_, Llamada>(&query)
            .bind(&dto.nombre)
            .bind(&dto.entrevistador)
            .bind(&dto.nivel)
            .bind(dto.promocion)
            .bind(&dto.resumen)
            .bind(&dto.conocimiento)
            .bind(dto.telefono)
            .bind(&dto.personalidad)
            .bind(&dto.transcripcion)
            .bind(dto.termino)
            .fetch_one(&self.pool)
            .await
        {
            Ok(llamada) => Respuesta::exito(
                StatusCode::CREATED,
                "Llamada creada con éxito",
                LlamadaMapper::to_response(&llamada),
            ),
            Err(err) => self.db_failure("LlamadaService::create", "Error al crear llamada", err),
        }
    }

    pub async fn update(&self, id_param: &str, body: &JsonValue) -> Respuesta {
        let Ok(id) = id_param.parse::<i64>() else {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "ID inválido", None);
        };

        let mut llamada = match self.fetch_llamada(id).await {
            Ok(Some(llamada)) => llamada,
            Ok(None) => {
                return Respuesta::fallo(StatusCode::NOT_FOUND, "Llamada no encontrada", None)
            }
            Err(err) => {
                return self.db_failure(
                    "LlamadaService::update",
                    "Error al actualizar llamada",
                    err,
                )
            }
        };

        LlamadaMapper::apply_updates(&mut llamada, body);

        match self.persist_llamada(&llamada).await {
            Ok(actualizada) => Respuesta::exito(
                StatusCode::OK,
                "Llamada actualizada con éxito",
                LlamadaMapper::to_response(&actualizada),
            ),
            Err(err) => self.db_failure(
                "LlamadaService::update",
                "Error al actualizar llamada",
                err,
            ),
        }
    }

    pub async fn delete(&self, id_param: &str) -> Respuesta {
        let Ok(id) = id_param.parse::<i64>() else {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "ID inválido", None);
        };

        match self.fetch_llamada(id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Respuesta::fallo(StatusCode::NOT_FOUND, "Llamada no encontrada", None)
            }
            Err(err) => {
                return self.db_failure(
                    "LlamadaService::delete",
                    "Error al eliminar llamada",
                    err,
                )
            }
        }

        match sqlx::query("DELETE FROM llamadas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(_) => Respuesta::exito(
                StatusCode::OK,
                "Llamada eliminada con éxito",
                JsonValue::Null,
            ),
            Err(err) => {
                self.db_failure("LlamadaService::delete", "Error al eliminar llamada", err)
            }
        }
    }

    // `termino` defaults to true when the body does not carry it.
    pub async fn mark_terminada(&self, id_param: &str, body: &JsonValue) -> Respuesta {
        let Ok(id) = id_param.parse::<i64>() else {
            return Respuesta::fallo(StatusCode::BAD_REQUEST, "ID inválido", None);
        };

        let termino = body
            .get("termino")
            .map(crate::dto::coerce_bool)
            .unwrap_or(true);

        match self.fetch_llamada(id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Respuesta::fallo(StatusCode::NOT_FOUND, "Llamada no encontrada", None)
            }
            Err(err) => {
                return self.db_failure(
                    "LlamadaService::mark_terminada",
                    "Error al marcar llamada como terminada",
                    err,
                )
            }
        }

        let query = format!(
            "UPDATE llamadas SET termino = $2, updated_at = NOW() WHERE id = $1 \
             RETURNING {COLUMNAS}"
        );
        match sqlx::query_as::<_, Llamada>(&query)
            .bind(id)
            .bind(termino)
            .fetch_one(&self.pool)
            .await
        {
            Ok(llamada) => Respuesta::exito(
                StatusCode::OK,
                format!(
                    "Llamada marcada como {} con éxito",
                    if termino { "terminada" } else { "no terminada" }
                ),
                LlamadaMapper::to_response(&llamada),
            ),
            Err(err) => self.db_failure(
                "LlamadaService::mark_terminada",
                "Error al marcar llamada como terminada",
                err,
            ),
        }
    }

    async fn fetch_llamada(&self, id: i64) -> Result<Option<Llamada>, sqlx::Error> {
        let query = format!("SELECT {COLUMNAS} FROM llamadas WHERE id = $1");
        sqlx::query_as::<_, Llamada>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn persist_llamada(&self, llamada: &Llamada) -> Result<Llamada, sqlx::Error> {
        let query = format!(
            "UPDATE llamadas SET nombre = $2, entrevistador = $3, nivel = $4, promocion = $5, \
             resumen = $6, conocimiento = $7, telefono = $8, personalidad = $9, \
             transcripcion = $10, termino = $11, updated_at = NOW() WHERE id = $1 \
             RETURNING {COLUMNAS}"
        );
        sqlx::query_as::<_, Llamada>(&query)
            .bind(llamada.id)
            .bind(&llamada.nombre)
            .bind(&llamada.entrevistador)
            .bind(&llamada.nivel)
            .bind(llamada.promocion)
            .bind(&llamada.resumen)
            .bind(&llamada.conocimiento)
            .bind(llamada.telefono)
            .bind(&llamada.personalidad)
            .bind(&llamada.transcripcion)
            .bind(llamada.termino)
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
