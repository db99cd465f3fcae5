use serde_json::json;

use crate::api::error::ok;
use crate::api::types::Request;

fn handle_health(req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        }),
    )
}

pub fn try_handle(req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(req)),
        _ => None,
    }
}
