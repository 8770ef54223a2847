//! Random workload generation.
//!
//! Produces valid process sets (`P1..Pn`) for experiments and invariant
//! testing. Pass a seeded RNG for reproducible workloads.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ProcessSpec;
use crate::validation::MAX_PROCESS_COUNT;

/// Parameters for random process sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Burst times are drawn from `1..=max_burst`.
    pub max_burst: i64,
    /// Priorities are drawn from `0..=max_priority`.
    pub max_priority: i32,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: MAX_PROCESS_COUNT,
            max_arrival: 10,
            max_burst: 8,
            max_priority: 5,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the arrival range upper bound.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst range upper bound (at least 1).
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the priority range upper bound.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Draws a process set.
    ///
    /// Out-of-range bounds set directly on the fields are clamped the same
    /// way the builders clamp them.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);
        let max_priority = self.max_priority.max(0);
        (1..=self.count)
            .map(|i| {
                ProcessSpec::new(
                    format!("P{i}"),
                    rng.random_range(0..=max_arrival),
                    rng.random_range(1..=max_burst),
                )
                .with_priority(rng.random_range(0..=max_priority))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_workload_is_valid() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(6).with_max_arrival(4).with_max_burst(3);
        for _ in 0..20 {
            let processes = generator.generate(&mut rng);
            assert_eq!(processes.len(), 6);
            assert!(validate_processes(&processes).is_ok());
            assert!(processes
                .iter()
                .all(|p| p.arrival_time <= 4 && (1..=3).contains(&p.burst_time)));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = WorkloadGenerator::default();
        let a = generator.generate(&mut SmallRng::seed_from_u64(7));
        let b = generator.generate(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_builder_clamps_ranges() {
        let generator = WorkloadGenerator::new(1)
            .with_max_arrival(-5)
            .with_max_burst(0)
            .with_max_priority(-1);
        assert_eq!(generator.max_arrival, 0);
        assert_eq!(generator.max_burst, 1);
        assert_eq!(generator.max_priority, 0);
    }

    #[test]
    fn test_generate_clamps_raw_fields() {
        let generator = WorkloadGenerator {
            count: 3,
            max_arrival: -2,
            max_burst: 0,
            max_priority: -7,
        };
        let processes = generator.generate(&mut SmallRng::seed_from_u64(1));
        assert!(validate_processes(&processes).is_ok());
        assert!(processes
            .iter()
            .all(|p| p.arrival_time == 0 && p.burst_time == 1 && p.priority == 0));
    }

    #[test]
    fn test_deserialized_zero_burst_still_generates() {
        let generator: WorkloadGenerator = serde_json::from_str(
            r#"{"count":2,"max_arrival":4,"max_burst":0,"max_priority":1}"#,
        )
        .unwrap();
        let processes = generator.generate(&mut SmallRng::seed_from_u64(9));
        assert!(processes.iter().all(|p| p.burst_time == 1));
    }
}
