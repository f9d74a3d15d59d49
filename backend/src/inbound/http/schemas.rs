//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape for the OpenAPI document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The referenced record does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "record 99 not found")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, e.g. `{"field": "name", "code": "empty_name"}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Record`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Record)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RecordSchema {
    /// Caller-supplied identifier.
    #[schema(example = 1)]
    id: i64,
    /// Non-empty record name.
    #[schema(example = "Lamp")]
    name: String,
    /// Optional description; `null` when unset.
    #[schema(example = "Desk lamp")]
    description: Option<String>,
    /// Price, unconstrained.
    #[schema(example = 10.0)]
    price: f64,
}
