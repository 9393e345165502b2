use actix_web::{HttpResponse, Responder, get};

use crate::dto::status::HealthResponse;

#[get("/healthz")]
/// Liveness probe used by container orchestrators.
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok())
}
