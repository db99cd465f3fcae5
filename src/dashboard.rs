use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::model::{AttendanceEntry, GradeEntry, StudentProfile};
use crate::summary::round_off_1_decimal;

// Sunday-first, aligned with chrono's num_days_from_sunday.
const WEEKDAYS_SHORT_ID: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];

/// One day of the weekly attendance series. The `Hadir`/`Absen` keys are
/// what the existing bar-chart consumer binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub date: String,
    #[serde(rename = "Hadir")]
    pub hadir: u32,
    #[serde(rename = "Absen")]
    pub absen: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentStudent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_level: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub attendance_rate: f64,
    pub avg_grade: f64,
    pub active_classes: usize,
    pub recent_students: Vec<RecentStudent>,
    pub weekly_attendance: Vec<DayBucket>,
}

/// Compute the admin dashboard stats from school-wide record slices.
/// `today` anchors the daily rate and the 7-day series; the engine never
/// reads the clock itself.
pub fn compute_stats(
    students: &[StudentProfile],
    grades: &[GradeEntry],
    attendance: &[AttendanceEntry],
    today: NaiveDate,
) -> DashboardStats {
    let total_students = students.iter().filter(|s| s.active).count();

    let present_today = attendance
        .iter()
        .filter(|a| a.date.date_naive() == today && a.status.is_present())
        .count();
    let attendance_rate = if total_students == 0 {
        0.0
    } else {
        round_off_1_decimal(100.0 * present_today as f64 / total_students as f64)
    };

    let avg_grade = if grades.is_empty() {
        0.0
    } else {
        let total: f64 = grades.iter().map(|g| g.score).sum();
        round_off_1_decimal(total / grades.len() as f64)
    };

    // Class list counts every student with a level set, inactive included.
    let active_classes = students
        .iter()
        .filter_map(|s| s.class_level.as_deref())
        .collect::<HashSet<_>>()
        .len();

    let mut recent: Vec<&StudentProfile> = students
        .iter()
        .filter(|s| s.active && s.registered_at.is_some())
        .collect();
    recent.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
    let recent_students = recent
        .iter()
        .take(5)
        .map(|s| RecentStudent {
            name: s.name.clone(),
            student_no: s.student_no.clone(),
            class_level: s.class_level.clone(),
        })
        .collect();

    let weekly_attendance = (0..7)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            let mut bucket = DayBucket {
                date: WEEKDAYS_SHORT_ID[day.weekday().num_days_from_sunday() as usize].to_string(),
                hadir: 0,
                absen: 0,
            };
            for a in attendance.iter().filter(|a| a.date.date_naive() == day) {
                if a.status.is_present() {
                    bucket.hadir += 1;
                } else {
                    bucket.absen += 1;
                }
            }
            bucket
        })
        .collect();

    DashboardStats {
        total_students,
        attendance_rate,
        avg_grade,
        active_classes,
        recent_students,
        weekly_attendance,
    }
}
