pub mod candidato_service;
pub mod llamada_service;
