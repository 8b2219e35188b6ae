pub mod candidato_routes;
pub mod health;
pub mod llamada_routes;
