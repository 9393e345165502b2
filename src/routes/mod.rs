//! HTTP handlers of the evaluator.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpResponse, web};

use crate::dto::status::ErrorResponse;

pub mod evaluate;
pub mod health;
pub mod metrics;

/// Registers every endpoint. Handlers expect `web::Data<EvaluatorMetrics>`
/// and `web::Data<EvaluationSettings>` to be present as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::healthz)
        .service(metrics::scrape_metrics)
        .service(evaluate::evaluate);
}

/// JSON extractor settings: bodies above `limit` bytes are answered with 413,
/// any other malformed body with 422 and an [`ErrorResponse`].
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let message = err.to_string();
            log::warn!("Rejected request body: {message}");

            let response = if matches!(
                err,
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. }
            ) {
                HttpResponse::PayloadTooLarge().json(ErrorResponse::new(message))
            } else {
                HttpResponse::UnprocessableEntity().json(ErrorResponse::new(message))
            };

            InternalError::from_response(err, response).into()
        })
}
