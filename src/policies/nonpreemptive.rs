//! Non-preemptive decision-point policies: SJF and priority.
//!
//! # Algorithm
//! At each decision point the ready set is scored by a [`SelectionRule`];
//! the winner runs to completion. With nothing ready, the clock advances
//! one tick and the tick is recorded as idle.
//!
//! A process that arrives with a better score never interrupts the one
//! already running.

use log::debug;

use super::rules::{select_best, PriorityDirection, PriorityRule, SelectionRule, ShortestBurst};
use super::{ProcessStore, Scheduler};
use crate::models::{Simulation, TimelineBuilder};

/// Shortest-Job-First (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }

    fn run(&self, store: ProcessStore) -> Simulation {
        run_to_completion(store, &ShortestBurst)
    }
}

/// Priority scheduling (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct NonPreemptivePriority {
    pub direction: PriorityDirection,
}

impl NonPreemptivePriority {
    pub fn new(direction: PriorityDirection) -> Self {
        Self { direction }
    }
}

impl Scheduler for NonPreemptivePriority {
    fn name(&self) -> &'static str {
        "NPP"
    }

    fn description(&self) -> &'static str {
        "Priority (non-preemptive)"
    }

    fn run(&self, store: ProcessStore) -> Simulation {
        run_to_completion(store, &PriorityRule::new(self.direction))
    }
}

fn run_to_completion<R: SelectionRule>(mut store: ProcessStore, rule: &R) -> Simulation {
    let mut timeline = TimelineBuilder::new();
    let mut time = 0;

    while !store.all_completed() {
        match select_best(rule, &store, store.ready(time)) {
            Some(idx) => {
                let burst = store.process(idx).burst_time;
                let finish = store.execute(idx, time, burst);
                debug!(
                    "{}: dispatch {} at {time}, runs to {finish}",
                    rule.name(),
                    store.process(idx).pid
                );
                timeline.run(&store.process(idx).pid, time, finish);
                time = finish;
            }
            None => {
                timeline.idle(time, time + 1);
                time += 1;
            }
        }
    }

    store.into_simulation(timeline.close(time))
}
