//! Simulation result model.
//!
//! A simulation is the immutable output of one policy run: the input
//! processes in dispatch order, their metrics in the same order, and the
//! CPU timeline.

use serde::{Deserialize, Serialize};

use super::{ProcessMetrics, ProcessSpec, Timeline};

/// Result of running one scheduling policy over a process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Input processes, stably ordered by arrival time.
    pub processes: Vec<ProcessSpec>,
    /// Metrics, parallel to `processes`.
    pub metrics: Vec<ProcessMetrics>,
    /// CPU occupancy over `[0, makespan)`.
    pub timeline: Timeline,
}

impl Simulation {
    /// Metrics for the given pid.
    pub fn metrics_for(&self, pid: &str) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.pid == pid)
    }

    /// Input record for the given pid.
    pub fn process(&self, pid: &str) -> Option<&ProcessSpec> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Pairs each input with its metrics (one table row per process).
    pub fn rows(&self) -> impl Iterator<Item = (&ProcessSpec, &ProcessMetrics)> {
        self.processes.iter().zip(self.metrics.iter())
    }

    /// Number of simulated processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Latest completion time.
    pub fn makespan(&self) -> i64 {
        self.metrics
            .iter()
            .map(|m| m.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Mean waiting time (0.0 for an empty run).
    pub fn average_waiting_time(&self) -> f64 {
        mean(self.metrics.iter().map(|m| m.waiting_time))
    }

    /// Mean turnaround time (0.0 for an empty run).
    pub fn average_turnaround_time(&self) -> f64 {
        mean(self.metrics.iter().map(|m| m.turnaround_time))
    }
}

fn mean(values: impl ExactSizeIterator<Item = i64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.map(|v| v as f64).sum::<f64>() / n as f64
}
