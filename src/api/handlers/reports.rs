use serde_json::Value;

use super::{decoded, encoded, optional_docs, required_day, required_str, respond};
use crate::api::error::err;
use crate::api::types::Request;
use crate::records;
use crate::report;
use crate::roster;

fn student_card(req: &Request) -> Result<Value, Value> {
    let student_doc = req
        .params
        .get("student")
        .ok_or_else(|| err(&req.id, "bad_params", "missing student", None))?;
    let student = decoded(req, records::student_from_doc(student_doc))?;
    let grades = optional_docs(req, "grades", records::grades_from_docs)?;
    let attendance = optional_docs(req, "attendance", records::attendance_from_docs)?;
    let printed_on = required_day(req, "printedOn")?;

    let model = report::student_report_card(&student, &grades, &attendance, printed_on);
    encoded(req, &model)
}

fn class_attendance(req: &Request) -> Result<Value, Value> {
    let class_level = required_str(req, "classLevel")?;
    let day = required_day(req, "date")?;
    let students = optional_docs(req, "students", records::students_from_docs)?;
    let day_records = optional_docs(req, "records", records::day_records_from_docs)?;

    let rows = roster::merge_class_day(&students, &day_records, day);
    let model = report::class_attendance_report(&class_level, day, rows);
    encoded(req, &model)
}

pub fn try_handle(req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "reports.studentCard" => Some(respond(req, student_card(req))),
        "reports.classAttendance" => Some(respond(req, class_attendance(req))),
        _ => None,
    }
}
