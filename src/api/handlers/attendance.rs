use serde_json::{json, Value};

use super::{encoded, optional_docs, required_day, respond};
use crate::api::types::Request;
use crate::records;
use crate::roster;

fn class_day(req: &Request) -> Result<Value, Value> {
    let day = required_day(req, "date")?;
    let students = optional_docs(req, "students", records::students_from_docs)?;
    let day_records = optional_docs(req, "records", records::day_records_from_docs)?;

    let rows = roster::merge_class_day(&students, &day_records, day);
    Ok(json!({
        "date": day.format("%Y-%m-%d").to_string(),
        "rows": encoded(req, &rows)?,
    }))
}

pub fn try_handle(req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "attendance.classDay" => Some(respond(req, class_day(req))),
        _ => None,
    }
}
