use crate::metrics::EvaluatorMetrics;
use crate::services::{ServiceError, ServiceResult};

/// Prometheus text body together with its content type.
#[derive(Debug)]
pub struct MetricsExport {
    pub content_type: String,
    pub body: String,
}

/// Renders the current metric values for scraping.
pub fn export_metrics(metrics: &EvaluatorMetrics) -> ServiceResult<MetricsExport> {
    let body = metrics.render().map_err(|err| {
        log::error!("Failed to encode metrics: {err}");
        ServiceError::Internal(err.to_string())
    })?;

    Ok(MetricsExport {
        content_type: metrics.content_type(),
        body,
    })
}
