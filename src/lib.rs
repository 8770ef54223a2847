//! Single-CPU scheduling simulator.
//!
//! Computes, for a fixed set of CPU-bound processes, the per-process timing
//! metrics (start, completion, turnaround, waiting) and the CPU occupancy
//! timeline that a classical scheduling policy would produce.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ProcessMetrics`,
//!   `Timeline`, `Segment`, `TimelineBuilder`, `Simulation`
//! - **`policies`**: FCFS, SJF, non-preemptive and preemptive priority,
//!   SRTF and Round-Robin, with their shared process store and selection rules
//! - **`simulator`**: `simulate` entry point, `SimulationConfig`, KPIs
//! - **`validation`**: Boundary checks and raw-input parsing
//! - **`workload`**: Seeded random process sets
//!
//! # Guarantees
//!
//! Every run is deterministic. Timelines start at tick 0, are contiguous up
//! to the last completion, merge adjacent segments with the same occupant,
//! and record idle periods explicitly.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod policies;
pub mod simulator;
pub mod validation;
pub mod workload;
