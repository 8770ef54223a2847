//! Simulation entry point and summary metrics.
//!
//! [`simulate`] is the single pure operation a front-end calls: it takes
//! the process set and a [`SimulationConfig`], validates both, runs the
//! selected policy, and returns a fresh [`Simulation`]. Nothing persists
//! between calls.
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::ProcessSpec;
//! use cpu_schedule::simulator::{simulate, Policy, ScheduleKpi, SimulationConfig};
//!
//! let processes = vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 1, 3)];
//! let config = SimulationConfig::new(Policy::RoundRobin).with_quantum(2);
//! let sim = simulate(&processes, &config).unwrap();
//! assert_eq!(sim.timeline.makespan(), 8);
//!
//! let kpi = ScheduleKpi::calculate(&sim);
//! assert!((kpi.avg_waiting_time - 3.0).abs() < 1e-10);
//! ```

mod config;
mod kpi;

pub use config::{Policy, SimulationConfig};
pub use kpi::ScheduleKpi;

use log::info;

use crate::models::{ProcessSpec, Simulation};
use crate::policies::ProcessStore;
use crate::validation::ValidationResult;

/// Runs the configured policy over `processes`.
///
/// Reports every input problem at once: process preconditions and, for
/// Round-Robin, the quantum.
pub fn simulate(
    processes: &[ProcessSpec],
    config: &SimulationConfig,
) -> ValidationResult<Simulation> {
    let scheduler = config.scheduler();
    let store = ProcessStore::new(processes);

    let (scheduler, store) = match (scheduler, store) {
        (Ok(scheduler), Ok(store)) => (scheduler, store),
        (Ok(_), Err(errors)) => return Err(errors),
        (Err(e), Ok(_)) => return Err(vec![e]),
        (Err(e), Err(mut errors)) => {
            errors.insert(0, e);
            return Err(errors);
        }
    };

    info!(
        "simulating {} processes with {} ({})",
        processes.len(),
        scheduler.name(),
        scheduler.description()
    );
    let sim = scheduler.run(store);
    info!(
        "{} finished: makespan {}, {} segments",
        scheduler.name(),
        sim.timeline.makespan(),
        sim.timeline.len()
    );
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;
    use crate::policies::PriorityDirection;
    use crate::validation::ValidationErrorKind;

    fn sample() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P1", 0, 4).with_priority(2),
            ProcessSpec::new("P2", 1, 3).with_priority(1),
            ProcessSpec::new("P3", 2, 1).with_priority(3),
        ]
    }

    #[test]
    fn test_simulate_dispatches_policy() {
        let sim = simulate(&sample(), &SimulationConfig::new(Policy::Srtf)).unwrap();
        // t=1: P1 has 3 left, P2 has 3 → P1 keeps running (earlier arrival).
        // t=2: P3 (1) preempts.
        assert_eq!(
            sim.timeline.segments,
            vec![
                Segment::process("P1", 0, 2),
                Segment::process("P3", 2, 3),
                Segment::process("P1", 3, 5),
                Segment::process("P2", 5, 8),
            ]
        );
    }

    #[test]
    fn test_simulate_priority_direction() {
        let high = SimulationConfig::new(Policy::PreemptivePriority)
            .with_priority_direction(PriorityDirection::HigherIsHigher);
        let sim = simulate(&sample(), &high).unwrap();
        assert_eq!(
            sim.timeline.segments,
            vec![
                Segment::process("P1", 0, 2),
                Segment::process("P3", 2, 3),
                Segment::process("P1", 3, 5),
                Segment::process("P2", 5, 8),
            ]
        );

        let low = SimulationConfig::new(Policy::PreemptivePriority);
        let sim = simulate(&sample(), &low).unwrap();
        assert_eq!(
            sim.timeline.segments,
            vec![
                Segment::process("P1", 0, 1),
                Segment::process("P2", 1, 4),
                Segment::process("P1", 4, 7),
                Segment::process("P3", 7, 8),
            ]
        );
    }

    #[test]
    fn test_simulate_collects_all_errors() {
        let config = SimulationConfig::new(Policy::RoundRobin).with_quantum(-1);
        let errors = simulate(&[ProcessSpec::new("P1", 0, 0)], &config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
        assert_eq!(errors[1].kind, ValidationErrorKind::InvalidBurst);
    }

    #[test]
    fn test_simulate_rejects_empty() {
        let errors = simulate(&[], &SimulationConfig::default()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidCount);
    }
}
