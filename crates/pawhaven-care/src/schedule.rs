//! Day-grouped schedule views over a reminder collection.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::recurrence::is_due;
use crate::types::{CareKind, Reminder};

/// Days covered by the week view.
pub const WEEK_WINDOW_DAYS: u32 = 7;
/// Days covered by the month view.
pub const MONTH_WINDOW_DAYS: u32 = 30;

/// View window anchored at a reference date, extending forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewWindow {
    /// The anchor date alone.
    Day,
    /// The anchor date plus the following six days.
    Week,
    /// The anchor date plus the following twenty-nine days.
    Month,
}

impl ViewWindow {
    /// Number of calendar days the window spans.
    pub fn days(self) -> u32 {
        match self {
            ViewWindow::Day => 1,
            ViewWindow::Week => WEEK_WINDOW_DAYS,
            ViewWindow::Month => MONTH_WINDOW_DAYS,
        }
    }
}

/// One calendar day of a generated schedule: the reminders due that day,
/// ordered by time of day.
///
/// Schedules are ephemeral — recomputed on every query, never persisted
/// independently of the reminder collection they were derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub reminders: Vec<Reminder>,
}

/// Build the day-grouped schedule for `window` anchored at `anchor`.
///
/// For each date in the window (anchor inclusive, forward only) this
/// selects reminders that are enabled, match `filter` when one is given,
/// and are due under their recurrence rule. Days with nothing due are
/// omitted entirely, so the result is sparse. Buckets come back ordered by
/// date ascending; within a bucket reminders are ordered by `time`
/// ascending, ties keeping collection order. The input collection is never
/// mutated.
pub fn generate(
    reminders: &[Reminder],
    anchor: NaiveDate,
    window: ViewWindow,
    filter: Option<CareKind>,
) -> Vec<DaySchedule> {
    let mut days = Vec::new();
    for offset in 0..window.days() {
        let date = anchor + Duration::days(i64::from(offset));
        let mut due: Vec<Reminder> = reminders
            .iter()
            .filter(|r| r.is_enabled)
            .filter(|r| filter.map_or(true, |kind| r.kind == kind))
            .filter(|r| is_due(r, date))
            .cloned()
            .collect();
        if due.is_empty() {
            continue;
        }
        // Stable sort: reminders sharing a time keep their collection order.
        due.sort_by_key(|r| r.time);
        days.push(DaySchedule { date, reminders: due });
    }
    debug!(%anchor, ?window, days = days.len(), "schedule generated");
    days
}
