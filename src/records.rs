//! Decoding of raw upstream documents into typed records.
//!
//! The store hands over loosely-typed JSON: dates may be RFC 3339 strings,
//! epoch milliseconds, or Mongo extended-JSON `{"$date": ...}` wrappers;
//! optional fields may be missing, null, or empty. Decoding is tolerant
//! about shape but strict about required fields.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::model::{AttendanceEntry, AttendanceStatus, GradeEntry, StudentDayRecord, StudentProfile};

fn parse_date(value: &Value, field: &str) -> Result<DateTime<Utc>> {
    if let Some(s) = value.as_str() {
        return DateTime::parse_from_rfc3339(s)
            .map(|d| d.with_timezone(&Utc))
            .with_context(|| format!("{} is not an RFC 3339 date: {}", field, s));
    }
    if let Some(ms) = value.as_i64() {
        return Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| anyhow!("{} epoch millis out of range: {}", field, ms));
    }
    if let Some(inner) = value.get("$date") {
        return parse_date(inner, field);
    }
    bail!("{} must be a date string or epoch milliseconds", field)
}

fn required_date(doc: &Value, key: &str) -> Result<DateTime<Utc>> {
    let value = doc.get(key).ok_or_else(|| anyhow!("missing {}", key))?;
    parse_date(value, key)
}

pub fn optional_date(doc: &Value, key: &str) -> Result<Option<DateTime<Utc>>> {
    match doc.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => parse_date(value, key).map(Some),
    }
}

fn required_str(doc: &Value, key: &str) -> Result<String> {
    doc.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow!("missing {}", key))
}

fn optional_str(doc: &Value, key: &str) -> Option<String> {
    doc.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

fn str_or_default(doc: &Value, key: &str, default: &str) -> String {
    match doc.get(key).and_then(|v| v.as_str()) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

pub fn grade_from_doc(doc: &Value) -> Result<GradeEntry> {
    Ok(GradeEntry {
        title: required_str(doc, "title")?,
        subject: str_or_default(doc, "subject", "General"),
        kind: str_or_default(doc, "type", "Assignment"),
        score: doc
            .get("score")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| anyhow!("missing score"))?,
        date: required_date(doc, "date")?,
        feedback: optional_str(doc, "feedback"),
    })
}

pub fn attendance_from_doc(doc: &Value) -> Result<AttendanceEntry> {
    Ok(AttendanceEntry {
        date: required_date(doc, "date")?,
        status: AttendanceStatus::parse(&required_str(doc, "status")?),
        notes: optional_str(doc, "notes"),
    })
}

pub fn day_record_from_doc(doc: &Value) -> Result<StudentDayRecord> {
    Ok(StudentDayRecord {
        student: required_str(doc, "student")?,
        date: required_date(doc, "date")?,
        status: AttendanceStatus::parse(&required_str(doc, "status")?),
        notes: optional_str(doc, "notes"),
    })
}

pub fn student_from_doc(doc: &Value) -> Result<StudentProfile> {
    let address = doc
        .get("biodata")
        .and_then(|b| b.get("address"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());
    Ok(StudentProfile {
        id: optional_str(doc, "_id"),
        name: required_str(doc, "name")?,
        class_level: optional_str(doc, "classLevel"),
        student_no: optional_str(doc, "studentId"),
        active: doc
            .get("isActive")
            .and_then(|v| v.as_bool())
            .unwrap_or(true),
        address,
        manual_evaluation: optional_str(doc, "manualEvaluation"),
        banned: doc
            .get("isBanned")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        ban_reason: optional_str(doc, "banReason"),
        ban_expires: optional_date(doc, "banExpires")?,
        last_message_at: optional_date(doc, "lastMessageSentAt")?,
        registered_at: optional_date(doc, "createdAt")?,
    })
}

fn docs_array<'a>(value: &'a Value, what: &str) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(|v| v.as_slice())
        .ok_or_else(|| anyhow!("{} must be an array", what))
}

pub fn grades_from_docs(value: &Value) -> Result<Vec<GradeEntry>> {
    let mut out = Vec::new();
    for (i, doc) in docs_array(value, "grades")?.iter().enumerate() {
        out.push(grade_from_doc(doc).with_context(|| format!("grades[{}]", i))?);
    }
    Ok(out)
}

pub fn attendance_from_docs(value: &Value) -> Result<Vec<AttendanceEntry>> {
    let mut out = Vec::new();
    for (i, doc) in docs_array(value, "attendance")?.iter().enumerate() {
        out.push(attendance_from_doc(doc).with_context(|| format!("attendance[{}]", i))?);
    }
    Ok(out)
}

pub fn day_records_from_docs(value: &Value) -> Result<Vec<StudentDayRecord>> {
    let mut out = Vec::new();
    for (i, doc) in docs_array(value, "records")?.iter().enumerate() {
        out.push(day_record_from_doc(doc).with_context(|| format!("records[{}]", i))?);
    }
    Ok(out)
}

pub fn students_from_docs(value: &Value) -> Result<Vec<StudentProfile>> {
    let mut out = Vec::new();
    for (i, doc) in docs_array(value, "students")?.iter().enumerate() {
        out.push(student_from_doc(doc).with_context(|| format!("students[{}]", i))?);
    }
    Ok(out)
}

/// One student's records as exported by the data layer. Collections that
/// are missing or null decode as empty, matching the engine's zero-default
/// rules.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub student: StudentProfile,
    pub grades: Vec<GradeEntry>,
    pub attendance: Vec<AttendanceEntry>,
}

pub fn snapshot_from_doc(doc: &Value) -> Result<Snapshot> {
    let student_doc = doc.get("student").ok_or_else(|| anyhow!("missing student"))?;
    let grades = match doc.get("grades") {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => grades_from_docs(value)?,
    };
    let attendance = match doc.get("attendance") {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => attendance_from_docs(value)?,
    };
    Ok(Snapshot {
        student: student_from_doc(student_doc)?,
        grades,
        attendance,
    })
}

pub fn read_snapshot_file(path: &Path) -> Result<Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read snapshot {}", path.display()))?;
    let doc: Value = serde_json::from_str(&text).context("snapshot is not valid JSON")?;
    snapshot_from_doc(&doc)
}
