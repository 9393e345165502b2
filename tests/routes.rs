use actix_web::{
    App,
    http::{StatusCode, header},
    test, web,
};
use serde_json::json;

use ga_evaluator::domain::evaluation::FitnessWeights;
use ga_evaluator::dto::evaluate::EvalResponse;
use ga_evaluator::dto::status::{ErrorResponse, HealthResponse};
use ga_evaluator::metrics::EvaluatorMetrics;
use ga_evaluator::routes::{configure, json_config};
use ga_evaluator::services::evaluate::EvaluationSettings;

macro_rules! init_app {
    ($payload_limit:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(EvaluatorMetrics::new().unwrap()))
                .app_data(web::Data::new(EvaluationSettings {
                    max_cores: 32,
                    weights: FitnessWeights::default(),
                }))
                .app_data(json_config($payload_limit))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn healthz_reports_ok() {
    let app = init_app!(4096);

    let req = test::TestRequest::get().uri("/healthz").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, HealthResponse::ok());
}

#[actix_web::test]
async fn evaluate_returns_fitness_breakdown() {
    let app = init_app!(4096);

    let req = test::TestRequest::post()
        .uri("/evaluate")
        .set_json(json!({
            "individual": [0, 1, 0],
            "execution_times": [2.0, 3.0, 4.0],
            "base_energy": 1.0,
            "idle_energy": 0.5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: EvalResponse = test::read_body_json(resp).await;
    assert_eq!(body.core_times, vec![6.0, 3.0]);
    assert_eq!(body.makespan, 6.0);
    assert!((body.total_energy - 10.5).abs() < 1e-9);
    assert!((body.imbalance - 1.0 / 3.0).abs() < 1e-9);
    let expected = 0.4 * (6.0 / 9.0) + 0.2 * (10.5 / 9.0) + 0.4 * (1.0 / 3.0);
    assert!((body.fitness - expected).abs() < 1e-9);
}

#[actix_web::test]
async fn evaluate_rejects_length_mismatch() {
    let app = init_app!(4096);

    let req = test::TestRequest::post()
        .uri("/evaluate")
        .set_json(json!({
            "individual": [0, 1],
            "execution_times": [2.0],
            "base_energy": 1.0,
            "idle_energy": 0.5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert!(body.error.contains("execution_times"));
}

#[actix_web::test]
async fn evaluate_rejects_core_ids_beyond_limit() {
    let app = init_app!(4096);

    let req = test::TestRequest::post()
        .uri("/evaluate")
        .set_json(json!({
            "individual": [32],
            "execution_times": [1.0],
            "base_energy": 1.0,
            "idle_energy": 0.5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn malformed_payload_is_unprocessable() {
    let app = init_app!(4096);

    let req = test::TestRequest::post()
        .uri("/evaluate")
        .set_json(json!({
            "individual": [-1],
            "execution_times": [1.0],
            "base_energy": 1.0,
            "idle_energy": 0.5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert!(!body.error.is_empty());
}

#[actix_web::test]
async fn oversized_payload_is_rejected() {
    let app = init_app!(64);

    let individual = vec![0; 100];
    let execution_times = vec![1.0; 100];
    let req = test::TestRequest::post()
        .uri("/evaluate")
        .set_json(json!({
            "individual": individual,
            "execution_times": execution_times,
            "base_energy": 1.0,
            "idle_energy": 0.5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[actix_web::test]
async fn metrics_reflect_evaluations() {
    let app = init_app!(4096);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/evaluate")
            .set_json(json!({
                "individual": [0],
                "execution_times": [1.0],
                "base_energy": 1.0,
                "idle_energy": 1.0
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("ga_evaluations_total 2"));
    assert!(text.contains("ga_evaluation_seconds_count 2"));
}

#[actix_web::test]
async fn largest_core_id_is_reported_without_overflow() {
    let app = init_app!(4096);

    let req = test::TestRequest::post()
        .uri("/evaluate")
        .set_json(json!({
            "individual": [u64::MAX],
            "execution_times": [1.0],
            "base_energy": 1.0,
            "idle_energy": 0.5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(
        body.error,
        format!("core id {} is out of range, ids must be below 32", u64::MAX)
    );
}

#[actix_web::test]
async fn integral_float_core_ids_are_accepted() {
    let app = init_app!(4096);

    let req = test::TestRequest::post()
        .uri("/evaluate")
        .set_json(json!({
            "individual": [1.0, 0.0],
            "execution_times": [2.0, 3.0],
            "base_energy": 1.0,
            "idle_energy": 0.5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: EvalResponse = test::read_body_json(resp).await;
    assert_eq!(body.core_times, vec![3.0, 2.0]);
}

#[actix_web::test]
async fn fractional_core_ids_are_unprocessable() {
    let app = init_app!(4096);

    let req = test::TestRequest::post()
        .uri("/evaluate")
        .set_json(json!({
            "individual": [1.5],
            "execution_times": [2.0],
            "base_energy": 1.0,
            "idle_energy": 0.5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
