//! Request and response bodies of the `/evaluate` endpoint.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::evaluation::{EnergyProfile, Evaluation};
use crate::domain::schedule::{Schedule, Task};
use crate::domain::types::{CoreId, EnergyRate, ExecutionTime};
use crate::dto::DtoError;

/// Candidate schedule submitted by the genetic algorithm.
///
/// `individual[i]` is the core that runs task `i`, which takes
/// `execution_times[i]` time units.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EvalRequest {
    #[serde(deserialize_with = "deserialize_core_ids")]
    #[validate(length(min = 1, message = "individual must not be empty"))]
    pub individual: Vec<usize>,
    #[validate(length(min = 1, message = "execution_times must not be empty"))]
    pub execution_times: Vec<f64>,
    #[validate(range(min = 0.0, message = "base_energy must not be negative"))]
    pub base_energy: f64,
    #[validate(range(min = 0.0, message = "idle_energy must not be negative"))]
    pub idle_energy: f64,
}

/// Core id as it may appear on the wire: GA clients written in dynamic
/// languages sometimes send `1.0` for core `1`.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireCoreId {
    Index(usize),
    Float(f64),
}

/// Accepts non-negative integers and floats without a fractional part.
fn deserialize_core_ids<'de, D>(deserializer: D) -> Result<Vec<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<WireCoreId>::deserialize(deserializer)?
        .into_iter()
        .map(|core| match core {
            WireCoreId::Index(index) => Ok(index),
            WireCoreId::Float(value) if value >= 0.0 && value.fract() == 0.0 => {
                Ok(value as usize)
            }
            WireCoreId::Float(value) => Err(D::Error::custom(format!(
                "core id must be a non-negative integer, got {value}"
            ))),
        })
        .collect()
}

impl EvalRequest {
    /// Validates the payload and converts it into domain values.
    pub fn into_domain(self, max_cores: usize) -> Result<(Schedule, EnergyProfile), DtoError> {
        self.validate()?;

        if self.individual.len() != self.execution_times.len() {
            return Err(DtoError::LengthMismatch {
                individual: self.individual.len(),
                execution_times: self.execution_times.len(),
            });
        }

        let tasks = self
            .individual
            .iter()
            .zip(&self.execution_times)
            .enumerate()
            .map(|(index, (&core, &duration))| {
                ExecutionTime::new(duration)
                    .map(|duration| Task::new(CoreId::new(core), duration))
                    .map_err(|source| DtoError::InvalidExecutionTime { index, source })
            })
            .collect::<Result<Vec<Task>, DtoError>>()?;

        let schedule = Schedule::new(tasks, max_cores)?;

        let base = EnergyRate::new(self.base_energy).map_err(|source| DtoError::InvalidValue {
            field: "base_energy",
            source,
        })?;
        let idle = EnergyRate::new(self.idle_energy).map_err(|source| DtoError::InvalidValue {
            field: "idle_energy",
            source,
        })?;

        Ok((schedule, EnergyProfile::new(base, idle)))
    }
}

/// Fitness and the figures it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalResponse {
    pub fitness: f64,
    pub core_times: Vec<f64>,
    pub total_energy: f64,
    pub makespan: f64,
    pub imbalance: f64,
}

impl From<Evaluation> for EvalResponse {
    fn from(value: Evaluation) -> Self {
        Self {
            fitness: value.fitness,
            core_times: value.core_times,
            total_energy: value.total_energy,
            makespan: value.makespan,
            imbalance: value.imbalance,
        }
    }
}
