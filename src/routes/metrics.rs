use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::status::ErrorResponse;
use crate::metrics::EvaluatorMetrics;
use crate::services::metrics as metrics_service;

#[get("/metrics")]
/// Prometheus scrape endpoint.
pub async fn scrape_metrics(metrics: web::Data<EvaluatorMetrics>) -> impl Responder {
    match metrics_service::export_metrics(metrics.get_ref()) {
        Ok(export) => HttpResponse::Ok()
            .content_type(export.content_type)
            .body(export.body),
        Err(err) => HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string())),
    }
}
