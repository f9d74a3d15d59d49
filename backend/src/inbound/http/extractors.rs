//! Extractor configuration mapping Actix rejections onto the error schema.
//!
//! Without these handlers Actix answers malformed bodies and path segments
//! with plain-text responses; here they become `invalid_request` payloads
//! carrying a machine-readable detail code.

use actix_web::{HttpRequest, error as actix_error, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

fn json_rejection(err: actix_error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = %req.path(), "rejected JSON payload");
    Error::invalid_request(err.to_string())
        .with_details(json!({ "code": "invalid_json" }))
        .into()
}

fn path_rejection(err: actix_error::PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = %req.path(), "rejected path parameters");
    Error::invalid_request("record id must be an integer")
        .with_details(json!({ "field": "id", "code": "invalid_path" }))
        .into()
}

/// JSON body extractor configuration.
///
/// Bodies sent without a `Content-Type` header are still parsed as JSON.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_rejection)
}

/// Path extractor configuration.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_rejection)
}
