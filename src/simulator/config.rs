//! Simulation configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::policies::{
    Fcfs, NonPreemptivePriority, PreemptivePriority, PriorityDirection, RoundRobin, Scheduler,
    Sjf, Srtf, DEFAULT_QUANTUM,
};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Priority (non-preemptive).
    NonPreemptivePriority,
    /// Priority (preemptive).
    PreemptivePriority,
    /// Shortest-Remaining-Time-First.
    Srtf,
    /// Round-Robin.
    RoundRobin,
}

impl Policy {
    /// Every policy, in selector order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::NonPreemptivePriority,
        Policy::PreemptivePriority,
        Policy::Srtf,
        Policy::RoundRobin,
    ];

    /// Short selector (e.g., "NPP").
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::NonPreemptivePriority => "NPP",
            Policy::PreemptivePriority => "PP",
            Policy::Srtf => "SRTF",
            Policy::RoundRobin => "RR",
        }
    }

    /// Whether the policy reads the `priority` field.
    pub fn uses_priority(self) -> bool {
        matches!(
            self,
            Policy::NonPreemptivePriority | Policy::PreemptivePriority
        )
    }

    /// Whether the policy reads the quantum.
    pub fn uses_quantum(self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = ValidationError;

    /// Parses a selector, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();
        Policy::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(selector))
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::UnknownPolicy,
                    format!("Unknown algorithm selected: '{selector}'"),
                )
            })
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Policy to run.
    pub policy: Policy,
    /// Priority reading for NPP/PP.
    pub priority_direction: PriorityDirection,
    /// Round-Robin quantum.
    pub quantum: i64,
}

impl SimulationConfig {
    /// Creates a config with the default direction and quantum.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            priority_direction: PriorityDirection::default(),
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets the priority direction.
    pub fn with_priority_direction(mut self, direction: PriorityDirection) -> Self {
        self.priority_direction = direction;
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Builds the scheduler for this config.
    ///
    /// Fails with `InvalidQuantum` for Round-Robin with `quantum <= 0`.
    /// The quantum is ignored by every other policy.
    pub fn scheduler(&self) -> Result<Box<dyn Scheduler>, ValidationError> {
        Ok(match self.policy {
            Policy::Fcfs => Box::new(Fcfs),
            Policy::Sjf => Box::new(Sjf),
            Policy::NonPreemptivePriority => {
                Box::new(NonPreemptivePriority::new(self.priority_direction))
            }
            Policy::PreemptivePriority => {
                Box::new(PreemptivePriority::new(self.priority_direction))
            }
            Policy::Srtf => Box::new(Srtf),
            Policy::RoundRobin => Box::new(RoundRobin::new(self.quantum)?),
        })
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Policy::Fcfs)
    }
}
