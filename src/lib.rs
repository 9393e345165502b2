#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::metrics::EvaluatorMetrics;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::services::evaluate::EvaluationSettings;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "server")]
pub mod metrics;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    server_config
        .validate()
        .map_err(|e| std::io::Error::other(format!("Invalid server config: {e}")))?;

    let metrics = EvaluatorMetrics::new()
        .map_err(|e| std::io::Error::other(format!("Failed to register metrics: {e}")))?;
    let metrics = web::Data::new(metrics);

    let settings = web::Data::new(EvaluationSettings::from(&server_config));
    let payload_limit = server_config.max_payload_bytes;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting evaluator on {}:{}",
        server_config.address,
        server_config.port
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(metrics.clone())
            .app_data(settings.clone())
            .app_data(routes::json_config(payload_limit))
            .configure(routes::configure)
    });

    if let Some(workers) = server_config.workers {
        server = server.workers(workers);
    }

    server.bind(bind_address)?.run().await
}
