use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{AttendanceEntry, AttendanceStatus, GradeEntry};

/// Half-up 1-decimal rounding used across the summary models:
/// `floor(10*x + 0.5) / 10`
pub fn round_off_1_decimal(x: f64) -> f64 {
    ((10.0 * x) + 0.5).floor() / 10.0
}

/// Half-up integer rounding (`floor(x + 0.5)`), used for subject averages.
pub fn round_off_integer(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const EVAL_NEEDS_EFFORT: &str = "Perlu Lebih Rajin";
pub const EVAL_FAIR: &str = "Cukup";
pub const EVAL_EXCELLENT: &str = "Sangat Baik";
pub const EVAL_GOOD: &str = "Baik";

/// Qualitative tier for a (score average, attendance percentage) pair.
///
/// Clause order is load-bearing: low attendance wins over every grade
/// clause, so a strong average with poor attendance still lands on
/// "Perlu Lebih Rajin".
pub fn evaluation_label(average_score: f64, attendance_percentage: f64) -> &'static str {
    if average_score < 60.0 || attendance_percentage < 50.0 {
        EVAL_NEEDS_EFFORT
    } else if average_score < 75.0 {
        EVAL_FAIR
    } else if average_score > 90.0 {
        EVAL_EXCELLENT
    } else {
        EVAL_GOOD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCount {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
}

/// One calendar-month bucket of the attendance series. Serialized with the
/// `name` key the existing chart consumers bind to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub name: String,
    pub present: u32,
    pub absent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAverage {
    pub subject: String,
    pub average: i64,
    pub full_mark: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradePoint {
    pub title: String,
    pub score: f64,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: usize,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub total_score: f64,
    pub average_score: f64,
    pub attendance_percentage: f64,
    pub attendance_count: AttendanceCount,
    pub evaluation: String,
    pub grade_count: usize,
    pub grades_list: Vec<GradePoint>,
    pub attendance_chart: Vec<ChartSlice>,
    pub monthly_attendance: Vec<MonthBucket>,
    pub subject_averages: Vec<SubjectAverage>,
}

/// Compute a student's performance summary from raw grade and attendance
/// records. Stateless and deterministic; never fails, empty inputs produce
/// the zero defaults instead of NaN.
///
/// A non-empty `manual_evaluation` replaces the computed label verbatim.
pub fn summarize(
    grades: &[GradeEntry],
    attendance: &[AttendanceEntry],
    manual_evaluation: Option<&str>,
) -> StudentSummary {
    let total_score: f64 = grades.iter().map(|g| g.score).sum();
    let average_score = if grades.is_empty() {
        0.0
    } else {
        round_off_1_decimal(total_score / grades.len() as f64)
    };

    let total_days = attendance.len();
    let present_days = attendance.iter().filter(|a| a.status.is_present()).count();
    let attendance_percentage = if total_days == 0 {
        0.0
    } else {
        round_off_1_decimal(100.0 * present_days as f64 / total_days as f64)
    };

    let evaluation = match manual_evaluation {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => evaluation_label(average_score, attendance_percentage).to_string(),
    };

    // Every non-Present status (Excused and Late included) lands in the
    // absent column; the monthly chart consumers were built on that split.
    let mut monthly_attendance: Vec<MonthBucket> = MONTHS
        .iter()
        .map(|m| MonthBucket {
            name: (*m).to_string(),
            present: 0,
            absent: 0,
        })
        .collect();
    for a in attendance {
        let bucket = &mut monthly_attendance[a.date.month0() as usize];
        if a.status.is_present() {
            bucket.present += 1;
        } else {
            bucket.absent += 1;
        }
    }

    // Group order is first appearance in the grade list, not sorted. An
    // empty subject string is its own group.
    let mut subject_order: Vec<String> = Vec::new();
    let mut subject_totals: HashMap<String, (f64, usize)> = HashMap::new();
    for g in grades {
        let acc = subject_totals.entry(g.subject.clone()).or_insert_with(|| {
            subject_order.push(g.subject.clone());
            (0.0, 0)
        });
        acc.0 += g.score;
        acc.1 += 1;
    }
    let subject_averages: Vec<SubjectAverage> = subject_order
        .iter()
        .map(|subject| {
            let (sum, count) = subject_totals[subject];
            SubjectAverage {
                subject: subject.clone(),
                average: round_off_integer(sum / count as f64),
                full_mark: 100,
            }
        })
        .collect();

    let grades_list: Vec<GradePoint> = grades
        .iter()
        .map(|g| GradePoint {
            title: g.title.clone(),
            score: g.score,
            date: g.date.format("%d/%m/%Y").to_string(),
        })
        .collect();

    let attendance_chart = vec![
        ChartSlice {
            name: "Hadir".to_string(),
            value: present_days,
            color: AttendanceStatus::Present.display_color().to_string(),
        },
        ChartSlice {
            name: "Absen/Sakit/Izin".to_string(),
            value: total_days - present_days,
            color: AttendanceStatus::Absent.display_color().to_string(),
        },
    ];

    StudentSummary {
        total_score,
        average_score,
        attendance_percentage,
        attendance_count: AttendanceCount {
            total: total_days,
            present: present_days,
            absent: total_days - present_days,
        },
        evaluation,
        grade_count: grades.len(),
        grades_list,
        attendance_chart,
        monthly_attendance,
        subject_averages,
    }
}
