//! CPU scheduling domain models.
//!
//! Provides the input and output types of a simulation run.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Caller-supplied process (immutable input) |
//! | `ProcessMetrics` | Per-process result, joined by pid |
//! | `Timeline` / `Segment` | CPU occupancy (Gantt) record |
//! | `TimelineBuilder` | Append/merge accumulator used by every policy |
//! | `Simulation` | Complete result of one run |

mod process;
mod simulation;
mod timeline;

pub use process::{ProcessMetrics, ProcessSpec};
pub use simulation::Simulation;
pub use timeline::{Occupant, Segment, Timeline, TimelineBuilder, TimelineIssue, IDLE_LABEL};
