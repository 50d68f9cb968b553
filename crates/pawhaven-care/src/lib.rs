//! `pawhaven-care` — recurring pet-care reminder scheduling.
//!
//! # Overview
//!
//! A reminder is a recurring care task (medication, feeding, grooming, …)
//! anchored at a start date and repeating under one of four fixed
//! frequencies. The crate answers three questions about a collection of
//! reminders, without ever reading the system clock — every operation takes
//! an explicit candidate or anchor date, so results are deterministic and
//! testable as-is:
//!
//! - [`recurrence::is_due`] — does this reminder have an occurrence on this
//!   calendar date?
//! - [`schedule::generate`] — which reminders are due on each day of a
//!   day/week/month view, grouped and time-ordered?
//! - [`completion`] — which occurrences has the user marked complete, and
//!   how far through today's tasks are they?
//!
//! # Frequency variants
//!
//! | Variant   | Occurrence rule (within `[start_date, end_date]`)        |
//! |-----------|----------------------------------------------------------|
//! | `Daily`   | Every date                                               |
//! | `Weekly`  | Whole-day distance from start divisible by 7             |
//! | `Monthly` | Day-of-month equals the start's day-of-month             |
//! | `Yearly`  | Month and day-of-month both equal the start's            |
//!
//! The collection itself is owned by the caller (typically the persistence
//! layer's cache); schedules are derived fresh on every call and never
//! retained here.

pub mod completion;
pub mod error;
pub mod recurrence;
pub mod schedule;
pub mod types;

pub use completion::{set_enabled, stats_for_date, toggle_completion, DayStats};
pub use error::{CareError, Result};
pub use recurrence::{is_due, next_occurrence};
pub use schedule::{generate, DaySchedule, ViewWindow};
pub use types::{CareKind, Frequency, Priority, Reminder};
