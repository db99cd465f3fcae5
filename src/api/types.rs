use serde::Deserialize;

/// One in-process request. The embedding layer (HTTP handler, report job,
/// test harness) builds these; `params` carries the raw documents for the
/// call, so every request is a self-contained snapshot.
#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}
