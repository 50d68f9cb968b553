use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CareError, Result};
use crate::recurrence;

/// Category of care a reminder covers.
///
/// Stored under the document key `type`. Validate caller-supplied strings
/// with [`FromStr`](std::str::FromStr) at the application boundary — an
/// unknown category is a construction-time error, not something the
/// scheduler falls through on later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareKind {
    Medication,
    Feeding,
    Grooming,
    Vet,
    Exercise,
    Vaccination,
    Other,
}

impl std::fmt::Display for CareKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CareKind::Medication => "medication",
            CareKind::Feeding => "feeding",
            CareKind::Grooming => "grooming",
            CareKind::Vet => "vet",
            CareKind::Exercise => "exercise",
            CareKind::Vaccination => "vaccination",
            CareKind::Other => "other",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for CareKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "medication" => Ok(CareKind::Medication),
            "feeding" => Ok(CareKind::Feeding),
            "grooming" => Ok(CareKind::Grooming),
            "vet" => Ok(CareKind::Vet),
            "exercise" => Ok(CareKind::Exercise),
            "vaccination" => Ok(CareKind::Vaccination),
            "other" => Ok(CareKind::Other),
            other => Err(format!("unknown care kind: {other}")),
        }
    }
}

/// How often a reminder recurs, anchored at its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(format!("unknown frequency: {other}")),
        }
    }
}

/// Display emphasis in list views. Never consulted by recurrence
/// computation or schedule ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// A recurring care task for one pet.
///
/// Due/completed status on any given date is derived, never stored: "due"
/// comes from [`recurrence::is_due`], "completed" from membership in
/// `completed_dates`. The collection of reminders is owned by the caller;
/// this crate hands back updated values and leaves persistence to the
/// store collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// UUID v4 string — primary key in the store document.
    pub id: String,
    /// The pet this task concerns. Pets are owned elsewhere; this is an
    /// opaque reference.
    pub pet_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Care category — `type` in the document format.
    #[serde(rename = "type")]
    pub kind: CareKind,
    pub frequency: Frequency,
    /// First possible occurrence (inclusive).
    pub start_date: NaiveDate,
    /// Last possible occurrence (inclusive); `None` means open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Time of day, used only to order reminders within one schedule day.
    pub time: NaiveTime,
    pub is_enabled: bool,
    /// Dates whose occurrence the user marked complete. Set semantics:
    /// a date appears at most once.
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
    pub priority: Priority,
}

impl Reminder {
    /// Create an enabled, medium-priority reminder with a fresh id and an
    /// empty completion history.
    pub fn new(
        pet_id: impl Into<String>,
        title: impl Into<String>,
        kind: CareKind,
        frequency: Frequency,
        start_date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            pet_id: pet_id.into(),
            title: title.into(),
            description: String::new(),
            kind,
            frequency,
            start_date,
            end_date: None,
            time,
            is_enabled: true,
            completed_dates: BTreeSet::new(),
            priority: Priority::Medium,
        }
    }

    /// Boundary validation — malformed reminders are rejected, never
    /// silently repaired.
    ///
    /// Rejects an `end_date` before `start_date`, and any completion entry
    /// that is not a genuine occurrence under the recurrence rule (which
    /// also covers entries outside the `[start_date, end_date]` range).
    pub fn validate(&self) -> Result<()> {
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(CareError::InvalidDateRange {
                    start: self.start_date,
                    end,
                });
            }
        }
        if let Some(&date) = self
            .completed_dates
            .iter()
            .find(|&&d| !recurrence::is_due(self, d))
        {
            return Err(CareError::InvalidOccurrence {
                id: self.id.clone(),
                date,
            });
        }
        Ok(())
    }

    /// Whether the occurrence on `date` has been marked complete.
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }
}
