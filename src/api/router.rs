use super::error::err;
use super::handlers;
use super::types::Request;

pub fn handle_request(req: &Request) -> serde_json::Value {
    if let Some(resp) = handlers::core::try_handle(req) {
        return resp;
    }
    if let Some(resp) = handlers::summary::try_handle(req) {
        return resp;
    }
    if let Some(resp) = handlers::attendance::try_handle(req) {
        return resp;
    }
    if let Some(resp) = handlers::reports::try_handle(req) {
        return resp;
    }
    if let Some(resp) = handlers::dashboard::try_handle(req) {
        return resp;
    }
    if let Some(resp) = handlers::policy::try_handle(req) {
        return resp;
    }

    err(
        &req.id,
        "not_implemented",
        format!("unknown method: {}", req.method),
        None,
    )
}
