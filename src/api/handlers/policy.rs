use serde_json::Value;

use super::{decoded, encoded, required_instant, respond};
use crate::api::error::err;
use crate::api::types::Request;
use crate::policy;
use crate::records;

fn ban_check(req: &Request) -> Result<Value, Value> {
    let student_doc = req
        .params
        .get("student")
        .ok_or_else(|| err(&req.id, "bad_params", "missing student", None))?;
    let student = decoded(req, records::student_from_doc(student_doc))?;
    let now = required_instant(req, "now")?;

    encoded(req, &policy::ban_verdict(&student, now))
}

fn message_window(req: &Request) -> Result<Value, Value> {
    let now = required_instant(req, "now")?;
    let last = decoded(
        req,
        records::optional_date(&req.params, "lastMessageSentAt"),
    )?;

    encoded(req, &policy::message_window(last, now))
}

pub fn try_handle(req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "policy.banCheck" => Some(respond(req, ban_check(req))),
        "policy.messageWindow" => Some(respond(req, message_window(req))),
        _ => None,
    }
}
