//! Remaining-days arithmetic and the due label shown on task cards.
//!
//! All comparisons are date-only: a deadline is a calendar day and "now"
//! is reduced to its UTC calendar day before subtracting.

use std::fmt;

use chrono::Utc;

use crate::status::TaskStatus;
use crate::types::{Deadline, Timestamp};

/// Signed number of whole days from `today` until `deadline`.
///
/// Zero when the deadline is today, negative once it has passed.
pub fn remaining_days(deadline: Deadline, today: Deadline) -> i64 {
    deadline.signed_duration_since(today).num_days()
}

/// Same as [`remaining_days`], discarding the time-of-day of `now`.
pub fn remaining_days_at(deadline: Deadline, now: Timestamp) -> i64 {
    remaining_days(deadline, now.date_naive())
}

/// Whether the deadline lies strictly before `today`.
pub fn is_overdue(deadline: Deadline, today: Deadline) -> bool {
    remaining_days(deadline, today) < 0
}

/// Current UTC calendar day.
pub fn today() -> Deadline {
    Utc::now().date_naive()
}

/// Label describing how close a task is to its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    Completed,
    DueIn(i64),
    DueToday,
    Overdue,
}

impl DueLabel {
    /// Pick the label for a task. A completed task is always `Completed`.
    pub fn for_task(status: TaskStatus, deadline: Deadline, today: Deadline) -> Self {
        if status == TaskStatus::Completed {
            return Self::Completed;
        }
        Self::from_remaining(remaining_days(deadline, today))
    }

    /// Label for an in-progress task with `days` remaining.
    pub fn from_remaining(days: i64) -> Self {
        match days {
            d if d > 0 => Self::DueIn(d),
            0 => Self::DueToday,
            _ => Self::Overdue,
        }
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => f.write_str("Completed"),
            Self::DueIn(1) => f.write_str("Due in 1 day"),
            Self::DueIn(n) => write!(f, "Due in {n} days"),
            Self::DueToday => f.write_str("Due is Today"),
            Self::Overdue => f.write_str("Overdue"),
        }
    }
}
