pub mod health_handler;
pub mod session_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use session_handler::{
    abandon_session, advance_session, assessment_summary, complete_session, finish_session,
    get_session, list_sessions, rename_subject, start_session,
};

/// Body extraction failures render as a structured `ValidationError`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid query string: {}", err)).into()
    })
}

/// Registers every REST route along with the extractor configs.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(start_session)
        .service(get_session)
        .service(advance_session)
        .service(complete_session)
        .service(finish_session)
        .service(abandon_session)
        .service(assessment_summary)
        .service(list_sessions)
        .service(rename_subject);
}
