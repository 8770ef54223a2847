//! Input validation for scheduling simulations.
//!
//! Two layers:
//! - Raw-input parsing ([`parse_count`], [`parse_process_row`],
//!   [`parse_processes`], [`parse_quantum`]) turns front-end text fields into
//!   typed values, rejecting non-integers and out-of-range counts.
//! - Precondition checks ([`validate_processes`], [`validate_quantum`]) run
//!   before every policy. Detects:
//!   - Empty process sets
//!   - Duplicate or reserved pids
//!   - Negative arrival times
//!   - Non-positive burst times
//!   - Workloads whose last completion would overflow the `i64` clock
//!
//! Nothing is silently corrected: every problem becomes a
//! [`ValidationError`] and all of them are reported together.

use crate::models::{ProcessSpec, IDLE_LABEL};
use std::collections::HashSet;
use std::fmt;

/// Largest process count accepted from raw input.
pub const MAX_PROCESS_COUNT: usize = 8;

/// Validation result.
pub type ValidationResult<T = ()> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Process count is missing, non-numeric, non-positive, or above the bound.
    InvalidCount,
    /// A process field is not an integer, or a pid is empty or reserved.
    InvalidField,
    /// Round-Robin quantum is non-numeric or non-positive.
    InvalidQuantum,
    /// Policy selector is not recognized.
    UnknownPolicy,
    /// Two processes share the same pid.
    DuplicateId,
    /// Burst time is zero or negative.
    InvalidBurst,
    /// Arrival time is negative.
    InvalidArrival,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks the preconditions every policy relies on.
///
/// Checks:
/// 1. At least one process
/// 2. No empty pid, and no pid equal to the idle label
/// 3. No duplicate pids
/// 4. `arrival_time >= 0`
/// 5. `burst_time > 0`
/// 6. `max(arrival_time) + sum(burst_time)` fits in `i64`, which bounds
///    every tick a policy can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCount,
            "At least one process is required",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if p.pid.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidField,
                "Process ID must not be empty",
            ));
        } else if p.pid == IDLE_LABEL {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidField,
                format!("Process ID '{IDLE_LABEL}' is reserved for idle periods"),
            ));
        }

        if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBurst,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the last completion tick, or `None` on overflow.
///
/// The CPU is never idle once the last process has arrived, so no policy
/// finishes later than the latest arrival plus the sum of all bursts.
fn horizon(processes: &[ProcessSpec]) -> Option<i64> {
    let latest = processes.iter().map(|p| p.arrival_time.max(0)).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |end, p| end.checked_add(p.burst_time.max(0)))
}

/// Checks that a Round-Robin quantum is positive.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum > 0 {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be a positive integer, got {quantum}"),
        ))
    }
}

/// Parses the requested number of processes.
///
/// Accepts `1..=MAX_PROCESS_COUNT`.
pub fn parse_count(raw: &str) -> Result<usize, ValidationError> {
    let invalid = || {
        ValidationError::new(
            ValidationErrorKind::InvalidCount,
            format!("Enter a valid number of processes (1-{MAX_PROCESS_COUNT}), got '{raw}'"),
        )
    };
    let count: i64 = raw.trim().parse().map_err(|_| invalid())?;
    if count <= 0 || count as usize > MAX_PROCESS_COUNT {
        return Err(invalid());
    }
    Ok(count as usize)
}

/// Parses a Round-Robin quantum.
pub fn parse_quantum(raw: &str) -> Result<i64, ValidationError> {
    let quantum: i64 = raw.trim().parse().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be an integer, got '{raw}'"),
        )
    })?;
    validate_quantum(quantum)?;
    Ok(quantum)
}

/// Raw text fields of one process-table row.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawProcessRow<'a> {
    /// Arrival time field.
    pub arrival: &'a str,
    /// Burst time field.
    pub burst: &'a str,
    /// Priority field; `None` when the selected policy has no priority column.
    pub priority: Option<&'a str>,
}

impl<'a> RawProcessRow<'a> {
    /// Creates a row without a priority column.
    pub fn new(arrival: &'a str, burst: &'a str) -> Self {
        Self {
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the priority field.
    pub fn with_priority(mut self, priority: &'a str) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Parses one table row into a process with pid `P{row}`.
///
/// `row` is 1-based. A missing priority field yields priority 0.
pub fn parse_process_row(row: usize, raw: &RawProcessRow<'_>) -> ValidationResult<ProcessSpec> {
    let mut errors = Vec::new();
    let mut field = |name: &str, value: &str| -> i64 {
        match value.trim().parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidField,
                    format!("Invalid input in row {row}: {name} '{value}' is not an integer"),
                ));
                0
            }
        }
    };

    let arrival_time = field("arrival time", raw.arrival);
    let burst_time = field("burst time", raw.burst);
    let priority = raw.priority.map(|p| field("priority", p)).unwrap_or(0);

    let priority = match i32::try_from(priority) {
        Ok(p) => p,
        Err(_) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidField,
                format!("Invalid input in row {row}: priority {priority} is out of range"),
            ));
            0
        }
    };

    if errors.is_empty() {
        Ok(ProcessSpec::new(format!("P{row}"), arrival_time, burst_time).with_priority(priority))
    } else {
        Err(errors)
    }
}

/// Parses a whole process table and checks the result's preconditions.
///
/// Rows are numbered from 1; errors from every row are reported together.
pub fn parse_processes(rows: &[RawProcessRow<'_>]) -> ValidationResult<Vec<ProcessSpec>> {
    if rows.len() > MAX_PROCESS_COUNT {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidCount,
            format!(
                "At most {MAX_PROCESS_COUNT} processes are supported, got {}",
                rows.len()
            ),
        )]);
    }

    let mut processes = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();
    for (i, raw) in rows.iter().enumerate() {
        match parse_process_row(i + 1, raw) {
            Ok(p) => processes.push(p),
            Err(mut row_errors) => errors.append(&mut row_errors),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    validate_processes(&processes)?;
    Ok(processes)
}
