//! Fitness evaluation of a candidate schedule.
//!
//! The fitness blends three normalized objectives, lower being better:
//! makespan relative to the total work, energy relative to the total work, and
//! the load imbalance across cores (coefficient of variation of core times).

use serde::Deserialize;

use crate::domain::schedule::Schedule;
use crate::domain::types::EnergyRate;

/// Energy drawn by a core while running a task and while waiting for the
/// slowest core to finish.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyProfile {
    pub base: EnergyRate,
    pub idle: EnergyRate,
}

impl EnergyProfile {
    #[must_use]
    pub fn new(base: EnergyRate, idle: EnergyRate) -> Self {
        Self { base, idle }
    }
}

/// Relative weight of each objective in the final fitness.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    pub makespan: f64,
    pub energy: f64,
    pub imbalance: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            makespan: 0.4,
            energy: 0.2,
            imbalance: 0.4,
        }
    }
}

/// Outcome of evaluating one schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub fitness: f64,
    pub core_times: Vec<f64>,
    pub total_energy: f64,
    pub makespan: f64,
    pub imbalance: f64,
}

impl Evaluation {
    /// `false` when any figure overflowed; such results cannot be serialized
    /// as JSON numbers.
    pub fn is_finite(&self) -> bool {
        self.fitness.is_finite()
            && self.total_energy.is_finite()
            && self.makespan.is_finite()
            && self.imbalance.is_finite()
            && self.core_times.iter().all(|time| time.is_finite())
    }
}

/// Computes makespan, energy, imbalance and the weighted fitness of `schedule`.
pub fn evaluate(
    schedule: &Schedule,
    profile: &EnergyProfile,
    weights: &FitnessWeights,
) -> Evaluation {
    let core_times = schedule.core_times();
    let makespan = core_times.iter().copied().fold(0.0, f64::max);

    let base = profile.base.get();
    let idle = profile.idle.get();
    let active_energy: f64 = core_times.iter().map(|time| time * base).sum();
    let idle_energy: f64 = core_times.iter().map(|time| (makespan - time) * idle).sum();
    let total_energy = active_energy + idle_energy;

    let imbalance = coefficient_of_variation(&core_times);

    let total_time = schedule.total_time();
    let fitness = weights.makespan * (makespan / total_time)
        + weights.energy * (total_energy / total_time)
        + weights.imbalance * imbalance;

    Evaluation {
        fitness,
        core_times,
        total_energy,
        makespan,
        imbalance,
    }
}

/// Population standard deviation divided by the mean. A zero mean is treated
/// as one so an all-idle machine reports no imbalance.
fn coefficient_of_variation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count;

    let divisor = if mean == 0.0 { 1.0 } else { mean };
    variance.sqrt() / divisor
}
