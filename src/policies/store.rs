//! Working set of one simulation run.

use crate::models::{ProcessMetrics, ProcessSpec, Simulation, Timeline};
use crate::validation::{validate_processes, ValidationResult};

/// Per-run process state shared by all policies.
///
/// Processes are held in *dispatch order*: stably sorted by arrival time,
/// ties keeping input order. Every tie-break in this crate is "lowest
/// dispatch index wins", so this ordering is part of each policy's contract.
///
/// A store can only be built from input that passes [`validate_processes`],
/// so every remaining burst starts positive and every reachable tick fits
/// in `i64`.
#[derive(Debug, Clone)]
pub struct ProcessStore {
    processes: Vec<ProcessSpec>,
    remaining: Vec<i64>,
    start: Vec<Option<i64>>,
    completion: Vec<Option<i64>>,
    completed: usize,
}

impl ProcessStore {
    /// Validates caller input and loads it in dispatch order.
    pub fn new(processes: &[ProcessSpec]) -> ValidationResult<Self> {
        validate_processes(processes)?;
        let mut processes = processes.to_vec();
        processes.sort_by_key(|p| p.arrival_time);
        let n = processes.len();
        Ok(Self {
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            processes,
            start: vec![None; n],
            completion: vec![None; n],
            completed: 0,
        })
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Process at the given dispatch index.
    #[inline]
    pub fn process(&self, idx: usize) -> &ProcessSpec {
        &self.processes[idx]
    }

    /// Remaining burst of the process at `idx`.
    #[inline]
    pub fn remaining(&self, idx: usize) -> i64 {
        self.remaining[idx]
    }

    /// Whether the process at `idx` has finished.
    #[inline]
    pub fn is_completed(&self, idx: usize) -> bool {
        self.completion[idx].is_some()
    }

    /// Whether every process has finished.
    pub fn all_completed(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Ready set at `time`, in dispatch order.
    pub fn ready(&self, time: i64) -> impl Iterator<Item = usize> + '_ {
        (0..self.processes.len())
            .filter(move |&i| self.processes[i].arrival_time <= time && !self.is_completed(i))
    }

    /// Runs the process at `idx` for `ticks` starting at `time`.
    ///
    /// Records the start time on first dispatch and the completion time
    /// when the remaining burst reaches zero. Returns the end tick.
    pub(crate) fn execute(&mut self, idx: usize, time: i64, ticks: i64) -> i64 {
        debug_assert!(ticks > 0 && ticks <= self.remaining[idx]);
        let end = time + ticks;
        self.start[idx].get_or_insert(time);
        self.remaining[idx] -= ticks;
        if self.remaining[idx] == 0 {
            self.completion[idx] = Some(end);
            self.completed += 1;
        }
        end
    }

    /// Joins the finished run with its timeline.
    ///
    /// # Panics
    /// If called before every process has completed.
    pub(crate) fn into_simulation(self, timeline: Timeline) -> Simulation {
        let metrics = self
            .processes
            .iter()
            .zip(self.start.iter().zip(&self.completion))
            .map(|(spec, times)| match times {
                (Some(start), Some(completion)) => {
                    ProcessMetrics::derive(spec, *start, *completion)
                }
                _ => unreachable!("process '{}' did not complete", spec.pid),
            })
            .collect();

        Simulation {
            processes: self.processes,
            metrics,
            timeline,
        }
    }
}
