//! Pure recurrence predicate — decides which calendar dates are occurrences.

use chrono::{Datelike, Duration, NaiveDate};

use crate::types::{Frequency, Reminder};

/// Upper bound for the [`next_occurrence`] forward scan, in days.
///
/// The longest legitimate gap between occurrences is a yearly rule anchored
/// on Feb 29: at most eight years between leap days.
const MAX_SCAN_DAYS: i64 = 8 * 366;

/// Whether `reminder` has an occurrence on `date`.
///
/// This is about the rule alone: `is_enabled` is ignored (the schedule
/// generator filters disabled reminders) and the system clock is never
/// read, so the same inputs always yield the same answer.
pub fn is_due(reminder: &Reminder, date: NaiveDate) -> bool {
    if date < reminder.start_date {
        return false;
    }
    if reminder.end_date.is_some_and(|end| date > end) {
        return false;
    }

    match reminder.frequency {
        Frequency::Daily => true,
        Frequency::Weekly => (date - reminder.start_date).num_days() % 7 == 0,
        // A start day past the end of a shorter month yields no occurrence
        // that month — a task anchored on the 31st is not clamped to the
        // 28th/30th.
        Frequency::Monthly => date.day() == reminder.start_date.day(),
        Frequency::Yearly => {
            date.month() == reminder.start_date.month()
                && date.day() == reminder.start_date.day()
        }
    }
}

/// Earliest occurrence strictly after `after`, or `None` when the rule is
/// exhausted (every remaining candidate falls past `end_date`).
///
/// Like [`is_due`] this considers the rule alone, not `is_enabled`.
pub fn next_occurrence(reminder: &Reminder, after: NaiveDate) -> Option<NaiveDate> {
    // Candidates before the start date are pointless; jump straight to it.
    let mut candidate = if after < reminder.start_date {
        reminder.start_date
    } else {
        after + Duration::days(1)
    };

    for _ in 0..MAX_SCAN_DAYS {
        if reminder.end_date.is_some_and(|end| candidate > end) {
            return None;
        }
        if is_due(reminder, candidate) {
            return Some(candidate);
        }
        candidate += Duration::days(1);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CareKind;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn reminder(frequency: Frequency, start: NaiveDate) -> Reminder {
        Reminder::new(
            "pet-1",
            "care task",
            CareKind::Other,
            frequency,
            start,
            NaiveTime::from_hms_opt(8, 0, 0).expect("valid time"),
        )
    }

    #[test]
    fn daily_due_on_every_date_from_start() {
        let r = reminder(Frequency::Daily, date(2024, 1, 1));
        assert!(is_due(&r, date(2024, 1, 1)));
        assert!(is_due(&r, date(2024, 1, 5)));
        assert!(is_due(&r, date(2025, 7, 19)));
        assert!(!is_due(&r, date(2023, 12, 31)));
    }

    #[test]
    fn weekly_due_on_seven_day_multiples_only() {
        // 2024-01-01 is a Monday.
        let r = reminder(Frequency::Weekly, date(2024, 1, 1));
        assert!(is_due(&r, date(2024, 1, 1)));
        assert!(is_due(&r, date(2024, 1, 8)));
        assert!(is_due(&r, date(2024, 1, 15)));
        assert!(!is_due(&r, date(2024, 1, 9)));
        assert!(!is_due(&r, date(2024, 1, 14)));
    }

    #[test]
    fn monthly_skips_months_without_the_start_day() {
        let r = reminder(Frequency::Monthly, date(2024, 1, 31));
        // February 2024 has 29 days, so no occurrence exists that month.
        assert!(!is_due(&r, date(2024, 2, 29)));
        assert!(!is_due(&r, date(2024, 2, 28)));
        assert!(is_due(&r, date(2024, 3, 31)));
        assert!(!is_due(&r, date(2024, 3, 30)));
    }

    #[test]
    fn yearly_matches_month_and_day() {
        let r = reminder(Frequency::Yearly, date(2024, 4, 15));
        assert!(is_due(&r, date(2025, 4, 15)));
        assert!(is_due(&r, date(2030, 4, 15)));
        assert!(!is_due(&r, date(2025, 4, 14)));
        assert!(!is_due(&r, date(2025, 5, 15)));
    }

    #[test]
    fn end_date_excludes_all_later_dates() {
        let mut r = reminder(Frequency::Daily, date(2024, 1, 1));
        r.end_date = Some(date(2024, 1, 10));
        assert!(is_due(&r, date(2024, 1, 10)));
        assert!(!is_due(&r, date(2024, 1, 11)));

        let mut w = reminder(Frequency::Weekly, date(2024, 1, 1));
        w.end_date = Some(date(2024, 1, 10));
        assert!(is_due(&w, date(2024, 1, 8)));
        assert!(!is_due(&w, date(2024, 1, 15)));
    }

    #[test]
    fn next_occurrence_before_start_is_the_start() {
        let r = reminder(Frequency::Weekly, date(2024, 1, 8));
        assert_eq!(next_occurrence(&r, date(2023, 6, 1)), Some(date(2024, 1, 8)));
    }

    #[test]
    fn next_occurrence_is_strictly_after() {
        let r = reminder(Frequency::Weekly, date(2024, 1, 1));
        assert_eq!(next_occurrence(&r, date(2024, 1, 1)), Some(date(2024, 1, 8)));
        assert_eq!(next_occurrence(&r, date(2024, 1, 7)), Some(date(2024, 1, 8)));
    }

    #[test]
    fn next_occurrence_monthly_jumps_over_short_months() {
        let r = reminder(Frequency::Monthly, date(2024, 1, 31));
        assert_eq!(
            next_occurrence(&r, date(2024, 1, 31)),
            Some(date(2024, 3, 31))
        );
    }

    #[test]
    fn next_occurrence_yearly_leap_anchor() {
        let r = reminder(Frequency::Yearly, date(2024, 2, 29));
        assert_eq!(
            next_occurrence(&r, date(2024, 3, 1)),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn next_occurrence_exhausted_past_end_date() {
        let mut r = reminder(Frequency::Daily, date(2024, 1, 1));
        r.end_date = Some(date(2024, 1, 10));
        assert_eq!(next_occurrence(&r, date(2024, 1, 9)), Some(date(2024, 1, 10)));
        assert_eq!(next_occurrence(&r, date(2024, 1, 10)), None);
    }
}
