//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (items, config, root)
//! - **Schemas**: Domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`RecordSchema`]) that provide OpenAPI definitions without coupling
//!   domain types to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::config::{ConfigResponse, DatabaseConfigResponse};
use crate::inbound::http::records::{RecordMutationResponse, RecordPayload};
use crate::inbound::http::root::WelcomeResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, RecordSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items backend API",
        description = "HTTP interface for an in-memory item catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::records::list_items,
        crate::inbound::http::records::get_item,
        crate::inbound::http::records::create_item,
        crate::inbound::http::records::update_item,
        crate::inbound::http::records::delete_item,
        crate::inbound::http::config::read_config,
        crate::inbound::http::root::read_root,
        crate::inbound::http::root::favicon,
    ),
    components(schemas(
        RecordSchema,
        RecordPayload,
        RecordMutationResponse,
        ConfigResponse,
        DatabaseConfigResponse,
        WelcomeResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "items", description = "Create, read, replace and delete items"),
        (name = "config", description = "Configuration echo"),
        (name = "root", description = "Welcome and favicon")
    )
)]
pub struct ApiDoc;
