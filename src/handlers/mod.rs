pub mod event;
pub mod member;
pub mod presence;

use actix_web::web;

use crate::errors::{AppError, ValidationError};

/// Undecodable JSON bodies answer 400 with the same `{"error": ...}` shape
/// as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(ValidationError::MalformedBody(err.to_string())).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::Validation(ValidationError::MalformedBody(err.to_string())).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());
    event::init_routes(cfg);
    member::init_routes(cfg);
    presence::init_routes(cfg);
}
