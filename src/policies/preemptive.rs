//! Tick-driven preemptive policies: priority and SRTF.
//!
//! Both re-evaluate the ready set at every tick boundary, so a running
//! process can be displaced by a newly arrived or re-scored one at any
//! tick. Idle ticks are recorded as idle segments.
//!
//! [`PreemptivePriority`] appends one segment per tick and relies on the
//! builder's merge; [`Srtf`] opens a segment only when the occupant changes
//! and leaves its end to be resolved by the next change or the final tick.

use log::debug;

use super::rules::{select_best, PriorityDirection, PriorityRule, ShortestRemaining};
use super::{ProcessStore, Scheduler};
use crate::models::{Occupant, Simulation, TimelineBuilder};

/// Priority scheduling (preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptivePriority {
    pub direction: PriorityDirection,
}

impl PreemptivePriority {
    pub fn new(direction: PriorityDirection) -> Self {
        Self { direction }
    }
}

impl Scheduler for PreemptivePriority {
    fn name(&self) -> &'static str {
        "PP"
    }

    fn description(&self) -> &'static str {
        "Priority (preemptive)"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn run(&self, mut store: ProcessStore) -> Simulation {
        let rule = PriorityRule::new(self.direction);
        let mut timeline = TimelineBuilder::new();
        let mut time = 0;

        while !store.all_completed() {
            match select_best(&rule, &store, store.ready(time)) {
                Some(idx) => {
                    store.execute(idx, time, 1);
                    timeline.run(&store.process(idx).pid, time, time + 1);
                    if store.is_completed(idx) {
                        debug!("PP: {} completes at {}", store.process(idx).pid, time + 1);
                    }
                }
                None => timeline.idle(time, time + 1),
            }
            time += 1;
        }

        store.into_simulation(timeline.close(time))
    }
}

/// Shortest-Remaining-Time-First (preemptive SJF).
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl Scheduler for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First (preemptive SJF)"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn run(&self, mut store: ProcessStore) -> Simulation {
        let mut timeline = TimelineBuilder::new();
        let mut current: Option<Occupant> = None;
        let mut time = 0;

        while !store.all_completed() {
            let next = match select_best(&ShortestRemaining, &store, store.ready(time)) {
                Some(idx) => {
                    store.execute(idx, time, 1);
                    Occupant::process(store.process(idx).pid.as_str())
                }
                None => Occupant::Idle,
            };

            if current.as_ref() != Some(&next) {
                debug!("SRTF: switch to {next} at {time}");
                timeline.open(next.clone(), time);
                current = Some(next);
            }
            time += 1;
        }

        store.into_simulation(timeline.close(time))
    }
}
