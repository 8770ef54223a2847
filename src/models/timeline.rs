//! CPU occupancy timeline (Gantt representation).
//!
//! A timeline is an ordered sequence of segments covering `[0, makespan)`
//! without gaps. Adjacent segments never share an occupant; periods where
//! no process is ready are recorded as explicit [`Occupant::Idle`] segments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for idle segments.
pub const IDLE_LABEL: &str = "Idle";

/// Who holds the CPU during a segment.
///
/// Serializes as a bare string: the pid, or `"Idle"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Occupant {
    /// No process is ready.
    Idle,
    /// A process, by pid.
    Process(String),
}

impl Occupant {
    /// Creates a process occupant.
    pub fn process(pid: impl Into<String>) -> Self {
        Occupant::Process(pid.into())
    }

    /// Whether this is an idle occupant.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Occupant::Idle)
    }

    /// The pid, or `None` for idle.
    pub fn pid(&self) -> Option<&str> {
        match self {
            Occupant::Idle => None,
            Occupant::Process(pid) => Some(pid),
        }
    }

    /// Display label (`"Idle"` or the pid).
    pub fn label(&self) -> &str {
        self.pid().unwrap_or(IDLE_LABEL)
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Occupant {
    fn from(label: String) -> Self {
        if label == IDLE_LABEL {
            Occupant::Idle
        } else {
            Occupant::Process(label)
        }
    }
}

impl From<Occupant> for String {
    fn from(occupant: Occupant) -> Self {
        match occupant {
            Occupant::Idle => IDLE_LABEL.to_string(),
            Occupant::Process(pid) => pid,
        }
    }
}

/// A maximal contiguous interval `[start, end)` assigned to one occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// CPU holder.
    pub occupant: Occupant,
    /// First tick (inclusive).
    pub start: i64,
    /// Last tick (exclusive).
    pub end: i64,
}

impl Segment {
    /// Creates a segment.
    pub fn new(occupant: Occupant, start: i64, end: i64) -> Self {
        Self {
            occupant,
            start,
            end,
        }
    }

    /// Creates a process segment.
    pub fn process(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self::new(Occupant::process(pid), start, end)
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self::new(Occupant::Idle, start, end)
    }

    /// Length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A structural defect found by [`Timeline::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineIssue {
    /// The first segment does not start at tick 0.
    NotAnchored { start: i64 },
    /// Segment `index` has `end <= start`.
    EmptySegment { index: usize },
    /// Segment `index` does not start where segment `index - 1` ends.
    Discontinuity { index: usize },
    /// Segments `index - 1` and `index` share an occupant.
    UnmergedNeighbors { index: usize },
}

/// Ordered, contiguous CPU occupancy record of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in time order.
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// End of the last segment (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments held by the given process.
    pub fn segments_for<'a>(&'a self, pid: &'a str) -> impl Iterator<Item = &'a Segment> + 'a {
        self.segments
            .iter()
            .filter(move |s| s.occupant.pid() == Some(pid))
    }

    /// Total ticks the given process held the CPU.
    pub fn busy_time(&self, pid: &str) -> i64 {
        self.segments_for(pid).map(Segment::duration).sum()
    }

    /// Total idle ticks.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.occupant.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Start of the first segment held by the given process.
    pub fn first_start(&self, pid: &str) -> Option<i64> {
        self.segments_for(pid).next().map(|s| s.start)
    }

    /// Fraction of `[0, makespan)` spent running processes.
    ///
    /// Returns `None` for an empty timeline.
    pub fn utilization(&self) -> Option<f64> {
        let makespan = self.makespan();
        if makespan <= 0 {
            return None;
        }
        Some((makespan - self.idle_time()) as f64 / makespan as f64)
    }

    /// Checks the structural invariants and returns every violation found.
    pub fn check_invariants(&self) -> Vec<TimelineIssue> {
        let mut issues = Vec::new();

        if let Some(first) = self.segments.first() {
            if first.start != 0 {
                issues.push(TimelineIssue::NotAnchored { start: first.start });
            }
        }

        for (index, seg) in self.segments.iter().enumerate() {
            if seg.end <= seg.start {
                issues.push(TimelineIssue::EmptySegment { index });
            }
            if index == 0 {
                continue;
            }
            let prev = &self.segments[index - 1];
            if prev.end != seg.start {
                issues.push(TimelineIssue::Discontinuity { index });
            }
            if prev.occupant == seg.occupant {
                issues.push(TimelineIssue::UnmergedNeighbors { index });
            }
        }

        issues
    }
}

/// Append/merge accumulator shared by all policies.
///
/// - [`append`](Self::append) merges with the previous segment when the
///   occupant matches and the intervals touch, and fills any gap before
///   `start` with an idle segment.
/// - [`open`](Self::open) starts a segment whose end is not yet known;
///   it is closed by the next `open` or by [`close`](Self::close).
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    segments: Vec<Segment>,
    open: Option<(Occupant, i64)>,
}

impl TimelineBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// End of the last closed segment (0 if none).
    pub fn end(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Records `occupant` on `[start, end)`.
    pub fn append(&mut self, occupant: Occupant, start: i64, end: i64) {
        debug_assert!(start >= self.end(), "segment overlaps the timeline");
        if end <= start {
            return;
        }
        let last_end = self.end();
        if start > last_end {
            self.push_merged(Occupant::Idle, last_end, start);
        }
        self.push_merged(occupant, start, end);
    }

    /// Records a process on `[start, end)`.
    pub fn run(&mut self, pid: &str, start: i64, end: i64) {
        self.append(Occupant::process(pid), start, end);
    }

    /// Records an idle period on `[start, end)`.
    pub fn idle(&mut self, start: i64, end: i64) {
        self.append(Occupant::Idle, start, end);
    }

    /// Opens a segment for `occupant` at `at`, closing any open segment there.
    pub fn open(&mut self, occupant: Occupant, at: i64) {
        self.close_open(at);
        self.open = Some((occupant, at));
    }

    /// Resolves any open segment to `end` and returns the timeline.
    pub fn close(mut self, end: i64) -> Timeline {
        self.close_open(end);
        Timeline {
            segments: self.segments,
        }
    }

    fn close_open(&mut self, at: i64) {
        if let Some((occupant, start)) = self.open.take() {
            self.append(occupant, start, at);
        }
    }

    fn push_merged(&mut self, occupant: Occupant, start: i64, end: i64) {
        if let Some(last) = self.segments.last_mut() {
            if last.occupant == occupant && last.end == start {
                last.end = end;
                return;
            }
        }
        self.segments.push(Segment::new(occupant, start, end));
    }
}
