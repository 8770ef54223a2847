//! Process (CPU-bound task) model.
//!
//! A process is split into two records:
//! - [`ProcessSpec`]: the caller-supplied input, never mutated by a run.
//! - [`ProcessMetrics`]: the per-run output, joined to its input by `pid`.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be simulated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier (e.g., "P1").
    pub pid: String,
    /// Tick at which the process becomes eligible for the CPU.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority. Its direction is a simulation-wide setting;
    /// only the priority policies read it.
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a process with priority 0.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Metrics computed for one process by one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier (join key with [`ProcessSpec`]).
    pub pid: String,
    /// Tick of the first CPU assignment.
    pub start_time: i64,
    /// Tick at which the full burst has been delivered.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl ProcessMetrics {
    /// Derives turnaround and waiting time from the start and completion ticks.
    pub fn derive(spec: &ProcessSpec, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - spec.arrival_time;
        Self {
            pid: spec.pid.clone(),
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - spec.burst_time,
        }
    }

    /// Ticks between arrival and first dispatch.
    #[inline]
    pub fn response_time(&self, spec: &ProcessSpec) -> i64 {
        self.start_time - spec.arrival_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = ProcessSpec::new("P1", 3, 5).with_priority(2);
        assert_eq!(p.pid, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(ProcessSpec::new("P1", 0, 1).priority, 0);
    }

    #[test]
    fn test_metrics_derive() {
        let p = ProcessSpec::new("P2", 1, 3);
        let m = ProcessMetrics::derive(&p, 5, 8);
        assert_eq!(m.pid, "P2");
        assert_eq!(m.turnaround_time, 7);
        assert_eq!(m.waiting_time, 4);
        assert_eq!(m.response_time(&p), 4);
    }
}
