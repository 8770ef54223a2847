//! Round-Robin.
//!
//! # Algorithm
//! 1. Admit every process whose arrival time has been reached to the FIFO
//!    ready queue, in dispatch order.
//! 2. With an empty queue, idle until the next arrival.
//! 3. Otherwise run the head for `min(quantum, remaining)` ticks.
//! 4. Admit processes that arrived during the slice **before** re-queueing
//!    the process that just ran, so new arrivals are served ahead of it.

use log::debug;
use std::collections::VecDeque;

use super::{ProcessStore, Scheduler};
use crate::models::{Simulation, TimelineBuilder};
use crate::validation::{validate_quantum, ValidationError};

/// Default time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Round-Robin with a fixed quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin policy.
    ///
    /// Fails with `InvalidQuantum` unless `quantum > 0`.
    pub fn new(quantum: i64) -> Result<Self, ValidationError> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn description(&self) -> &'static str {
        "Round-Robin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn run(&self, mut store: ProcessStore) -> Simulation {
        let mut timeline = TimelineBuilder::new();
        let mut queue = VecDeque::with_capacity(store.len());
        let mut next_arrival = 0;
        let mut time = 0;

        while next_arrival < store.len() || !queue.is_empty() {
            admit(&store, &mut next_arrival, &mut queue, time);

            let Some(idx) = queue.pop_front() else {
                let arrival = store.process(next_arrival).arrival_time;
                debug!("RR: idle [{time}, {arrival})");
                timeline.idle(time, arrival);
                time = arrival;
                continue;
            };

            let slice = self.quantum.min(store.remaining(idx));
            let finish = store.execute(idx, time, slice);
            timeline.run(&store.process(idx).pid, time, finish);
            time = finish;

            admit(&store, &mut next_arrival, &mut queue, time);
            if store.is_completed(idx) {
                debug!("RR: {} completes at {time}", store.process(idx).pid);
            } else {
                queue.push_back(idx);
            }
        }

        store.into_simulation(timeline.close(time))
    }
}

/// Moves every process that has arrived by `time` into the ready queue.
fn admit(store: &ProcessStore, next: &mut usize, queue: &mut VecDeque<usize>, time: i64) {
    while *next < store.len() && store.process(*next).arrival_time <= time {
        queue.push_back(*next);
        *next += 1;
    }
}
