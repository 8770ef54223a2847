//! Single-CPU scheduling policies.
//!
//! Six deterministic policies, each replaying a discrete simulation over a
//! fresh [`ProcessStore`] and recording CPU occupancy through a
//! [`TimelineBuilder`](crate::models::TimelineBuilder).
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | arrival order |
//! | SJF | no | shortest burst |
//! | NPP | no | best priority |
//! | PP | yes (per tick) | best priority |
//! | SRTF | yes (per tick) | shortest remaining burst |
//! | RR | yes (per quantum) | FIFO queue |
//!
//! # Tie-breaking
//! Processes are stably sorted by arrival time ("dispatch order"). Whenever
//! several ready processes share the best score, the one earliest in
//! dispatch order is selected.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::models::ProcessSpec;
//! use cpu_schedule::policies;
//!
//! let processes = vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 1, 3)];
//! let sim = policies::fcfs(&processes).unwrap();
//! assert_eq!(sim.metrics_for("P2").unwrap().waiting_time, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod nonpreemptive;
mod preemptive;
mod round_robin;
pub mod rules;
mod store;

pub use fcfs::Fcfs;
pub use nonpreemptive::{NonPreemptivePriority, Sjf};
pub use preemptive::{PreemptivePriority, Srtf};
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use rules::PriorityDirection;
pub use store::ProcessStore;

use crate::models::{ProcessSpec, Simulation};
use crate::validation::ValidationResult;
use std::fmt::Debug;

/// A single-CPU scheduling policy.
pub trait Scheduler: Debug {
    /// Short selector (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Whether a running process can be interrupted.
    fn is_preemptive(&self) -> bool {
        false
    }

    /// Runs the policy over a validated store.
    fn run(&self, store: ProcessStore) -> Simulation;

    /// Validates the input, then runs the policy.
    fn schedule(&self, processes: &[ProcessSpec]) -> ValidationResult<Simulation> {
        Ok(self.run(ProcessStore::new(processes)?))
    }
}

/// First-Come-First-Served.
pub fn fcfs(processes: &[ProcessSpec]) -> ValidationResult<Simulation> {
    Fcfs.schedule(processes)
}

/// Shortest-Job-First (non-preemptive).
pub fn sjf(processes: &[ProcessSpec]) -> ValidationResult<Simulation> {
    Sjf.schedule(processes)
}

/// Priority (non-preemptive).
pub fn npp(
    processes: &[ProcessSpec],
    direction: PriorityDirection,
) -> ValidationResult<Simulation> {
    NonPreemptivePriority::new(direction).schedule(processes)
}

/// Priority (preemptive).
pub fn pp(
    processes: &[ProcessSpec],
    direction: PriorityDirection,
) -> ValidationResult<Simulation> {
    PreemptivePriority::new(direction).schedule(processes)
}

/// Shortest-Remaining-Time-First.
pub fn srtf(processes: &[ProcessSpec]) -> ValidationResult<Simulation> {
    Srtf.schedule(processes)
}

/// Round-Robin with the given quantum.
pub fn round_robin(processes: &[ProcessSpec], quantum: i64) -> ValidationResult<Simulation> {
    RoundRobin::new(quantum)
        .map_err(|e| vec![e])?
        .schedule(processes)
}
