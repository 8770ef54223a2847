//! Simulation quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | Avg Response Time | mean(start - arrival) |
//! | Makespan | Latest completion time |
//! | Idle Time | Ticks with no process ready |
//! | Utilization | Busy ticks / makespan |
//! | Throughput | Processes completed per tick |

use serde::{Deserialize, Serialize};

use crate::models::Simulation;

/// Summary indicators of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean waiting time (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround_time: f64,
    /// Mean response time (ticks).
    pub avg_response_time: f64,
    /// Latest completion time (ticks).
    pub makespan: i64,
    /// Total idle ticks.
    pub idle_time: i64,
    /// CPU utilization (0.0..1.0).
    pub utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished simulation.
    pub fn calculate(sim: &Simulation) -> Self {
        let n = sim.process_count();
        let makespan = sim.makespan();
        let total_response: f64 = sim.rows().map(|(p, m)| m.response_time(p) as f64).sum();

        Self {
            avg_waiting_time: sim.average_waiting_time(),
            avg_turnaround_time: sim.average_turnaround_time(),
            avg_response_time: if n == 0 {
                0.0
            } else {
                total_response / n as f64
            },
            makespan,
            idle_time: sim.timeline.idle_time(),
            utilization: sim.timeline.utilization().unwrap_or(0.0),
            throughput: if makespan <= 0 {
                0.0
            } else {
                n as f64 / makespan as f64
            },
        }
    }

    /// The front-end summary line.
    pub fn summary_line(&self) -> String {
        format!(
            "Average Waiting Time: {:.2}    |    Average Turnaround Time: {:.2}",
            self.avg_waiting_time, self.avg_turnaround_time
        )
    }
}
