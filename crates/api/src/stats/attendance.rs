use std::collections::BTreeSet;

use chrono::NaiveDate;
use infra::models::{PlayerRow, PracticeSessionRow};

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRow {
    pub player: String,
    /// One flag per session column, in column order.
    pub present: Vec<bool>,
    pub present_count: usize,
    pub attendance_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAttendance {
    /// One column per practice session in the month, ascending by date.
    pub dates: Vec<NaiveDate>,
    pub total_practices: usize,
    /// Sorted descending by attendance percentage, name as tiebreaker.
    pub rows: Vec<AttendanceRow>,
}

/// First and last day of a month; None when the month is out of range.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_month.pred_opt()?))
}

/// Player × practice-date boolean table with per-player attendance
/// percentage. `sessions` must already be limited to the month (the repo
/// query does that) and sorted ascending by date.
pub fn monthly_attendance(
    players: &[PlayerRow],
    sessions: &[PracticeSessionRow],
) -> MonthlyAttendance {
    let dates: Vec<NaiveDate> = sessions.iter().map(|s| s.date).collect();
    let total = sessions.len();

    let mut names: BTreeSet<String> = players.iter().map(|p| p.name.clone()).collect();
    for session in sessions {
        for attendee in &session.attendees {
            names.insert(attendee.clone());
        }
    }

    let mut rows: Vec<AttendanceRow> = names
        .into_iter()
        .map(|name| {
            let present: Vec<bool> = sessions
                .iter()
                .map(|s| s.attendees.iter().any(|a| a == &name))
                .collect();
            let present_count = present.iter().filter(|p| **p).count();
            let attendance_pct = if total == 0 {
                0.0
            } else {
                present_count as f64 / total as f64 * 100.0
            };
            AttendanceRow {
                player: name,
                present,
                present_count,
                attendance_pct,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.attendance_pct
            .partial_cmp(&a.attendance_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.player.cmp(&b.player))
    });

    MonthlyAttendance {
        dates,
        total_practices: total,
        rows,
    }
}
