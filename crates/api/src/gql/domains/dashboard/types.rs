use async_graphql::SimpleObject;
use chrono::NaiveDate;

use crate::stats::attendance;

#[derive(SimpleObject, Clone)]
pub struct PlayerMinutesSummary {
    pub player_name: String,
    pub minutes_played: i64,
    pub practice_minutes: i64,
    pub total_minutes: i64,
}

#[derive(SimpleObject, Clone)]
pub struct PlayerTotalsSummary {
    pub player_name: String,
    pub games_played: i64,
    pub practices_attended: i64,
    pub total_activities: i64,
}

#[derive(SimpleObject, Clone)]
pub struct AttendanceRow {
    pub player_name: String,
    /// One flag per practice column, in column order.
    pub present: Vec<bool>,
    pub present_count: i32,
    pub attendance_pct: f64,
}

#[derive(SimpleObject, Clone)]
pub struct MonthlyAttendance {
    /// One column per practice session in the month, ascending by date.
    pub dates: Vec<NaiveDate>,
    pub total_practices: i32,
    /// Sorted descending by attendance percentage.
    pub rows: Vec<AttendanceRow>,
}

impl From<attendance::MonthlyAttendance> for MonthlyAttendance {
    fn from(table: attendance::MonthlyAttendance) -> Self {
        Self {
            dates: table.dates,
            total_practices: table.total_practices as i32,
            rows: table
                .rows
                .into_iter()
                .map(|row| AttendanceRow {
                    player_name: row.player,
                    present: row.present,
                    present_count: row.present_count as i32,
                    attendance_pct: row.attendance_pct,
                })
                .collect(),
        }
    }
}
