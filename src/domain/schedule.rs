//! Task-to-core assignments produced by the genetic algorithm.

use thiserror::Error;

use crate::domain::types::{CoreId, ExecutionTime};

/// Reasons a candidate schedule cannot be evaluated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule must contain at least one task")]
    Empty,

    #[error("core id {core} is out of range, ids must be below {limit}")]
    CoreOutOfRange { core: usize, limit: usize },

    #[error("total execution time must be greater than zero")]
    ZeroTotalTime,
}

/// A single task placed on a core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Task {
    pub core: CoreId,
    pub duration: ExecutionTime,
}

impl Task {
    #[must_use]
    pub fn new(core: CoreId, duration: ExecutionTime) -> Self {
        Self { core, duration }
    }
}

/// Validated schedule. Cores are numbered `0..core_count`, including cores
/// that received no task.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    tasks: Vec<Task>,
    core_count: usize,
    total_time: f64,
}

impl Schedule {
    /// Builds a schedule, rejecting empty task lists, core ids at or beyond
    /// `max_cores` and schedules whose tasks take no time at all.
    pub fn new(tasks: Vec<Task>, max_cores: usize) -> Result<Self, ScheduleError> {
        let highest = tasks
            .iter()
            .map(|task| task.core)
            .max()
            .ok_or(ScheduleError::Empty)?;

        if highest.get() >= max_cores {
            return Err(ScheduleError::CoreOutOfRange {
                core: highest.get(),
                limit: max_cores,
            });
        }
        // `highest < max_cores`, so this cannot overflow.
        let core_count = highest.get() + 1;

        let total_time: f64 = tasks.iter().map(|task| task.duration.get()).sum();
        if total_time <= 0.0 {
            return Err(ScheduleError::ZeroTotalTime);
        }

        Ok(Self {
            tasks,
            core_count,
            total_time,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn core_count(&self) -> usize {
        self.core_count
    }

    /// Sum of every task duration.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Accumulated busy time per core, indexed by core id.
    pub fn core_times(&self) -> Vec<f64> {
        let mut core_times = vec![0.0; self.core_count];
        for task in &self.tasks {
            core_times[task.core.get()] += task.duration.get();
        }
        core_times
    }
}
