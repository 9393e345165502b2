//! Prometheus instrumentation of the evaluator.

use std::time::Duration;

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Sink for per-evaluation measurements.
pub trait EvaluationRecorder: Send + Sync {
    /// Counts one evaluation request reaching the service layer.
    fn record_attempt(&self);

    /// Records how long the fitness computation took.
    fn record_duration(&self, elapsed: Duration);
}

/// Counters and histograms exported on `/metrics`.
///
/// Each instance owns its registry, so tests can run in parallel without
/// sharing counts.
#[derive(Clone)]
pub struct EvaluatorMetrics {
    registry: Registry,
    evaluations: IntCounter,
    duration: Histogram,
}

impl EvaluatorMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let evaluations = IntCounter::new(
            "ga_evaluations_total",
            "Total number of fitness evaluations",
        )?;
        let duration = Histogram::with_opts(HistogramOpts::new(
            "ga_evaluation_seconds",
            "Time taken per fitness evaluation (s)",
        ))?;

        registry.register(Box::new(evaluations.clone()))?;
        registry.register(Box::new(duration.clone()))?;

        Ok(Self {
            registry,
            evaluations,
            duration,
        })
    }

    /// Number of evaluations counted so far.
    pub fn evaluations_total(&self) -> u64 {
        self.evaluations.get()
    }

    /// Encodes every registered metric in the text exposition format.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    /// Content type matching [`EvaluatorMetrics::render`].
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }
}

impl EvaluationRecorder for EvaluatorMetrics {
    fn record_attempt(&self) {
        self.evaluations.inc();
    }

    fn record_duration(&self, elapsed: Duration) {
        self.duration.observe(elapsed.as_secs_f64());
    }
}
