use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::evaluate::EvalRequest;
use crate::dto::status::ErrorResponse;
use crate::metrics::EvaluatorMetrics;
use crate::services::evaluate::EvaluationSettings;
use crate::services::{ServiceError, evaluate as evaluate_service};

#[post("/evaluate")]
/// Score one candidate schedule.
pub async fn evaluate(
    request: web::Json<EvalRequest>,
    metrics: web::Data<EvaluatorMetrics>,
    settings: web::Data<EvaluationSettings>,
) -> impl Responder {
    match evaluate_service::evaluate_schedule(
        metrics.get_ref(),
        settings.get_ref(),
        request.into_inner(),
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::UnprocessableEntity().json(ErrorResponse::new(message))
        }
        Err(err) => {
            log::error!("Failed to evaluate schedule: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("internal server error"))
        }
    }
}
