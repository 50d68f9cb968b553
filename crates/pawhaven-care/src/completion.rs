//! Per-occurrence completion state and day-level aggregates.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::error::{CareError, Result};
use crate::recurrence::is_due;
use crate::schedule::DaySchedule;
use crate::types::Reminder;

/// Aggregate completion figures for one schedule day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayStats {
    /// Reminders due on the day.
    pub total: usize,
    /// Due reminders whose occurrence was marked complete.
    pub completed: usize,
}

/// Flip the completion state of the occurrence on `date`.
///
/// Returns the new state: `true` when the occurrence is now complete.
/// Completion is freely reversible, including after the date has passed.
///
/// Dates that are not occurrences of the reminder are rejected with
/// [`CareError::InvalidOccurrence`] — a phantom entry would count toward
/// [`stats_for_date`] `completed` without ever contributing to `total`.
pub fn toggle_completion(reminder: &mut Reminder, date: NaiveDate) -> Result<bool> {
    if !is_due(reminder, date) {
        return Err(CareError::InvalidOccurrence {
            id: reminder.id.clone(),
            date,
        });
    }

    let completed = if reminder.completed_dates.remove(&date) {
        false
    } else {
        reminder.completed_dates.insert(date);
        true
    };
    info!(reminder_id = %reminder.id, %date, completed, "completion toggled");
    Ok(completed)
}

/// Enable or disable a reminder.
///
/// Completion history is untouched either way; a disabled reminder simply
/// produces no occurrences while it stays disabled.
pub fn set_enabled(reminder: &mut Reminder, enabled: bool) {
    reminder.is_enabled = enabled;
    info!(reminder_id = %reminder.id, enabled, "reminder toggled");
}

/// Completion figures for `date` within an already-generated schedule.
///
/// A date with no bucket yields `{ total: 0, completed: 0 }`; rendering
/// that as "no progress" rather than an error is the caller's concern.
pub fn stats_for_date(schedule: &[DaySchedule], date: NaiveDate) -> DayStats {
    let Some(day) = schedule.iter().find(|d| d.date == date) else {
        return DayStats {
            total: 0,
            completed: 0,
        };
    };
    let completed = day
        .reminders
        .iter()
        .filter(|r| r.is_completed_on(date))
        .count();
    DayStats {
        total: day.reminders.len(),
        completed,
    }
}
