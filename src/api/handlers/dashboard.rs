use serde_json::Value;

use super::{encoded, optional_docs, required_day, respond};
use crate::api::types::Request;
use crate::dashboard;
use crate::records;

fn stats(req: &Request) -> Result<Value, Value> {
    let today = required_day(req, "today")?;
    let students = optional_docs(req, "students", records::students_from_docs)?;
    let grades = optional_docs(req, "grades", records::grades_from_docs)?;
    let attendance = optional_docs(req, "attendance", records::attendance_from_docs)?;

    let model = dashboard::compute_stats(&students, &grades, &attendance, today);
    encoded(req, &model)
}

pub fn try_handle(req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.stats" => Some(respond(req, stats(req))),
        _ => None,
    }
}
