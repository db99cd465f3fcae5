//! Print-ready report models. Layout and rendering (PDF, print CSS) belong
//! to the consumers; this module only decides what the reports say.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::model::{AttendanceEntry, GradeEntry, StudentProfile};
use crate::roster::ClassDayRow;
use crate::summary;

pub const INSTITUTION_NAME: &str = "Lembaga Kursus Bahasa Inggris";
pub const REPORT_CARD_TITLE: &str = "Laporan Hasil Belajar Siswa";
pub const CLASS_REPORT_TITLE: &str = "Laporan Kehadiran Harian";

// Monday-first, aligned with chrono's num_days_from_monday.
const WEEKDAYS_ID: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];
const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Long-form Indonesian date, e.g. "Senin, 4 Maret 2024".
pub fn long_date_id(day: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        WEEKDAYS_ID[day.weekday().num_days_from_monday() as usize],
        day.day(),
        MONTHS_ID[day.month0() as usize],
        day.year()
    )
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportGradeRow {
    pub title: String,
    pub kind: String,
    pub score: f64,
    pub date: String,
}

/// The student report card ("rapor") model: header, performance recap, and
/// the full grade table, newest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCardModel {
    pub institution: String,
    pub title: String,
    pub student_name: String,
    pub class_level: String,
    pub printed_on: String,
    pub average_score: f64,
    pub attendance_percentage: f64,
    pub present_days: usize,
    pub total_days: usize,
    pub rows: Vec<ReportGradeRow>,
}

pub fn student_report_card(
    student: &StudentProfile,
    grades: &[GradeEntry],
    attendance: &[AttendanceEntry],
    printed_on: NaiveDate,
) -> ReportCardModel {
    let recap = summary::summarize(grades, attendance, None);

    let mut ordered: Vec<&GradeEntry> = grades.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    let rows = ordered
        .iter()
        .map(|g| ReportGradeRow {
            title: g.title.clone(),
            kind: g.kind.clone(),
            score: g.score,
            date: g.date.format("%d/%m/%Y").to_string(),
        })
        .collect();

    ReportCardModel {
        institution: INSTITUTION_NAME.to_string(),
        title: REPORT_CARD_TITLE.to_string(),
        student_name: student.name.clone(),
        class_level: student
            .class_level
            .clone()
            .unwrap_or_else(|| "-".to_string()),
        printed_on: long_date_id(printed_on),
        average_score: recap.average_score,
        attendance_percentage: recap.attendance_percentage,
        present_days: recap.attendance_count.present,
        total_days: recap.attendance_count.total,
        rows,
    }
}

/// The daily class-attendance report model, one row per roster student.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAttendanceModel {
    pub institution: String,
    pub title: String,
    pub class_level: String,
    pub date: String,
    pub rows: Vec<ClassDayRow>,
}

pub fn class_attendance_report(
    class_level: &str,
    date: NaiveDate,
    rows: Vec<ClassDayRow>,
) -> ClassAttendanceModel {
    ClassAttendanceModel {
        institution: INSTITUTION_NAME.to_string(),
        title: CLASS_REPORT_TITLE.to_string(),
        class_level: class_level.to_string(),
        date: long_date_id(date),
        rows,
    }
}
