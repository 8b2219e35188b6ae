pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod schemas;
pub mod services;
pub mod utils;

use axum::{
    routing::{get, patch},
    Router,
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::{candidato_service::CandidatoService, llamada_service::LlamadaService};
use crate::utils::logging::FailureLog;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub candidato_service: CandidatoService,
    pub llamada_service: LlamadaService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let log = FailureLog::default();
        let candidato_service = CandidatoService::new(pool.clone(), log.clone());
        let llamada_service = LlamadaService::new(pool.clone(), log);

        Self {
            pool,
            candidato_service,
            llamada_service,
        }
    }
}

pub fn app(state: AppState) -> Router {
    let candidatos_api = Router::new()
        .route(
            "/api/candidatos",
            get(routes::candidato_routes::list_candidatos)
                .post(routes::candidato_routes::create_candidato),
        )
        .route(
            "/api/candidatos/estado/:estado",
            get(routes::candidato_routes::list_by_estado),
        )
        .route(
            "/api/candidatos/pendientes-llamar",
            get(routes::candidato_routes::list_pendientes_llamar),
        )
        .route(
            "/api/candidatos/:id",
            get(routes::candidato_routes::get_candidato)
                .put(routes::candidato_routes::update_candidato)
                .delete(routes::candidato_routes::delete_candidato),
        )
        .route(
            "/api/candidatos/:id/estado",
            patch(routes::candidato_routes::update_estado),
        );

    let llamadas_api = Router::new()
        .route(
            "/api/llamadas",
            get(routes::llamada_routes::list_llamadas).post(routes::llamada_routes::create_llamada),
        )
        .route(
            "/api/llamadas/terminadas",
            get(routes::llamada_routes::list_terminadas),
        )
        .route(
            "/api/llamadas/pendientes",
            get(routes::llamada_routes::list_pendientes),
        )
        .route(
            "/api/llamadas/promociones",
            get(routes::llamada_routes::list_promociones),
        )
        .route(
            "/api/llamadas/rechazos",
            get(routes::llamada_routes::list_rechazos),
        )
        .route(
            "/api/llamadas/nivel/:nivel",
            get(routes::llamada_routes::list_by_nivel),
        )
        .route(
            "/api/llamadas/entrevistador/:entrevistador",
            get(routes::llamada_routes::list_by_entrevistador),
        )
        .route(
            "/api/llamadas/:id",
            get(routes::llamada_routes::get_llamada)
                .put(routes::llamada_routes::update_llamada)
                .delete(routes::llamada_routes::delete_llamada),
        )
        .route(
            "/api/llamadas/:id/terminar",
            patch(routes::llamada_routes::mark_terminada),
        );

    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        .merge(candidatos_api)
        .merge(llamadas_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
