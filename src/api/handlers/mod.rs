pub mod attendance;
pub mod core;
pub mod dashboard;
pub mod policy;
pub mod reports;
pub mod summary;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::api::error::{err, ok};
use crate::api::types::Request;

pub(super) fn respond(req: &Request, outcome: Result<Value, Value>) -> Value {
    match outcome {
        Ok(result) => ok(&req.id, result),
        Err(resp) => resp,
    }
}

fn required_str(req: &Request, key: &str) -> Result<String, Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {}", key), None))
}

fn required_day(req: &Request, key: &str) -> Result<NaiveDate, Value> {
    let raw = required_str(req, key)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
        err(
            &req.id,
            "bad_params",
            format!("{} must be a YYYY-MM-DD date", key),
            None,
        )
    })
}

fn required_instant(req: &Request, key: &str) -> Result<DateTime<Utc>, Value> {
    let raw = required_str(req, key)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| {
            err(
                &req.id,
                "bad_params",
                format!("{} must be an RFC 3339 datetime", key),
                None,
            )
        })
}

fn decoded<T>(req: &Request, outcome: anyhow::Result<T>) -> Result<T, Value> {
    outcome.map_err(|e| err(&req.id, "bad_docs", format!("{:#}", e), None))
}

/// Decode an optional document collection; missing or null means empty,
/// matching the engines' zero-default rules.
fn optional_docs<T>(
    req: &Request,
    key: &str,
    decode: fn(&Value) -> anyhow::Result<Vec<T>>,
) -> Result<Vec<T>, Value> {
    match req.params.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => decoded(req, decode(value)),
    }
}

fn encoded<T: Serialize>(req: &Request, value: &T) -> Result<Value, Value> {
    serde_json::to_value(value).map_err(|e| err(&req.id, "encode_failed", e.to_string(), None))
}
