use std::time::Instant;

use crate::domain::evaluation::{FitnessWeights, evaluate};
use crate::dto::evaluate::{EvalRequest, EvalResponse};
use crate::metrics::EvaluationRecorder;
use crate::models::config::ServerConfig;
use crate::services::{ServiceError, ServiceResult};

/// Parameters of the fitness computation shared by every request.
#[derive(Debug, Clone)]
pub struct EvaluationSettings {
    pub max_cores: usize,
    pub weights: FitnessWeights,
}

impl From<&ServerConfig> for EvaluationSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            max_cores: config.max_cores,
            weights: config.fitness,
        }
    }
}

/// Scores the submitted schedule.
///
/// Every call is counted by `recorder`; the duration is only recorded when the
/// payload was valid and the fitness was actually computed.
pub fn evaluate_schedule<R>(
    recorder: &R,
    settings: &EvaluationSettings,
    request: EvalRequest,
) -> ServiceResult<EvalResponse>
where
    R: EvaluationRecorder + ?Sized,
{
    recorder.record_attempt();

    let (schedule, profile) = request.into_domain(settings.max_cores).map_err(|err| {
        log::warn!("Rejected evaluation request: {err}");
        ServiceError::from(err)
    })?;

    let started = Instant::now();
    let evaluation = evaluate(&schedule, &profile, &settings.weights);
    let elapsed = started.elapsed();
    recorder.record_duration(elapsed);

    if !evaluation.is_finite() {
        log::warn!("Evaluation overflowed for {} tasks", schedule.tasks().len());
        return Err(ServiceError::Validation(
            "evaluation produced a non-finite result".to_string(),
        ));
    }

    log::info!(
        "Eval done: makespan={:.2}, energy={:.2}, imbalance={:.4}, fitness={:.4}, took={:.4}s",
        evaluation.makespan,
        evaluation.total_energy,
        evaluation.imbalance,
        evaluation.fitness,
        elapsed.as_secs_f64()
    );

    Ok(evaluation.into())
}
