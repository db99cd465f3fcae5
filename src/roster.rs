use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::model::{StudentDayRecord, StudentProfile};

/// Status shown for a roster student with no record on the requested day.
pub const NOT_MARKED: &str = "Not Marked";

pub fn same_calendar_day(at: DateTime<Utc>, day: NaiveDate) -> bool {
    at.date_naive() == day
}

/// One row of the class day-attendance view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDayRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_no: Option<String>,
    pub name: String,
    pub status: String,
    pub status_label: String,
    pub status_color: String,
    pub notes: String,
}

/// Merge a class roster with that day's attendance records, one row per
/// roster student in roster order. Students without a matching record get
/// `Not Marked` and a `-` note. Records from other days are ignored, so a
/// caller may pass an unfiltered record set.
pub fn merge_class_day(
    students: &[StudentProfile],
    records: &[StudentDayRecord],
    day: NaiveDate,
) -> Vec<ClassDayRow> {
    students
        .iter()
        .map(|student| {
            let record = student.id.as_deref().and_then(|id| {
                records
                    .iter()
                    .find(|r| r.student == id && same_calendar_day(r.date, day))
            });
            match record {
                Some(r) => ClassDayRow {
                    student_no: student.student_no.clone(),
                    name: student.name.clone(),
                    status: r.status.as_str().to_string(),
                    status_label: r.status.label_id().to_string(),
                    status_color: r.status.display_color().to_string(),
                    notes: r.notes.clone().filter(|n| !n.is_empty()).unwrap_or_else(|| "-".to_string()),
                },
                None => ClassDayRow {
                    student_no: student.student_no.clone(),
                    name: student.name.clone(),
                    status: NOT_MARKED.to_string(),
                    status_label: NOT_MARKED.to_string(),
                    status_color: "black".to_string(),
                    notes: "-".to_string(),
                },
            }
        })
        .collect()
}
