use serde_json::{json, Value};

use super::{decoded, encoded, optional_docs, respond};
use crate::api::error::err;
use crate::api::types::Request;
use crate::model::StudentProfile;
use crate::records;
use crate::summary;

fn optional_student(req: &Request) -> Result<Option<StudentProfile>, Value> {
    match req.params.get("student") {
        None | Some(Value::Null) => Ok(None),
        Some(doc) => decoded(req, records::student_from_doc(doc)).map(Some),
    }
}

fn summary_get(req: &Request) -> Result<Value, Value> {
    let grades = optional_docs(req, "grades", records::grades_from_docs)?;
    let attendance = optional_docs(req, "attendance", records::attendance_from_docs)?;
    let student = optional_student(req)?;

    // An explicit manualEvaluation param outranks the one on the student
    // document.
    let manual = req
        .params
        .get("manualEvaluation")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .or_else(|| student.as_ref().and_then(|s| s.manual_evaluation.clone()));

    let model = summary::summarize(&grades, &attendance, manual.as_deref());
    let mut result = encoded(req, &model)?;
    if let Some(s) = student {
        result["student"] = json!({
            "name": s.name,
            "classLevel": s.class_level,
            "address": s.address.unwrap_or_else(|| "-".to_string()),
        });
    }
    Ok(result)
}

fn summary_evaluate(req: &Request) -> Result<Value, Value> {
    let average_score = req
        .params
        .get("averageScore")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| err(&req.id, "bad_params", "missing averageScore", None))?;
    let attendance_percentage = req
        .params
        .get("attendancePercentage")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| err(&req.id, "bad_params", "missing attendancePercentage", None))?;

    let manual = req
        .params
        .get("manualEvaluation")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    let evaluation = match manual {
        Some(label) => label.to_string(),
        None => summary::evaluation_label(average_score, attendance_percentage).to_string(),
    };
    Ok(json!({ "evaluation": evaluation }))
}

pub fn try_handle(req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "summary.get" => Some(respond(req, summary_get(req))),
        "summary.evaluate" => Some(respond(req, summary_evaluate(req))),
        _ => None,
    }
}
