//! API endpoint modules.

pub mod cases;
pub mod expectations;
pub mod health;
pub mod openapi;
pub mod platforms;
pub mod preconditions;
pub mod products;
pub mod releases;
pub mod runs;
pub mod steps;

use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::error::AppError;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;

/// Register every `/api/v1` route on a service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes)
        .configure(openapi::configure_routes)
        .configure(products::configure_routes)
        .configure(releases::configure_routes)
        .configure(platforms::configure_routes)
        .configure(cases::configure_routes)
        .configure(steps::configure_routes)
        .configure(preconditions::configure_routes)
        .configure(expectations::configure_routes)
        .configure(runs::configure_routes);
}

/// JSON body extraction that reports failures as `{"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, req| rejected(req, format!("Invalid request body: {}", err)))
}

/// Path extraction for integer ids.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, req| rejected(req, format!("Invalid path parameter: {}", err)))
}

/// Query-string extraction for list filters.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, req| rejected(req, format!("Invalid query parameter: {}", err)))
}

fn rejected(req: &HttpRequest, message: String) -> actix_web::Error {
    debug!(path = %req.path(), "{}", message);
    AppError::InvalidInput(message).into()
}
