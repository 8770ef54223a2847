//! First-Come-First-Served.
//!
//! Runs processes to completion in dispatch order, idling until the next
//! arrival when the CPU would otherwise be free.
//!
//! # Complexity
//! O(n log n) for the arrival sort, O(n) thereafter.

use log::debug;

use super::{ProcessStore, Scheduler};
use crate::models::{Simulation, TimelineBuilder};

/// First-Come-First-Served (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn run(&self, mut store: ProcessStore) -> Simulation {
        let mut timeline = TimelineBuilder::new();
        let mut time = 0;

        for idx in 0..store.len() {
            let arrival = store.process(idx).arrival_time;
            if time < arrival {
                debug!("FCFS: idle [{time}, {arrival})");
                timeline.idle(time, arrival);
                time = arrival;
            }
            let burst = store.process(idx).burst_time;
            let finish = store.execute(idx, time, burst);
            timeline.run(&store.process(idx).pid, time, finish);
            time = finish;
        }

        store.into_simulation(timeline.close(time))
    }
}
