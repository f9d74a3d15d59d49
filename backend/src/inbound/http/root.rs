//! Welcome and favicon routes.
//!
//! ```text
//! GET /
//! GET /favicon.ico
//! ```

use std::io;

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Greeting returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the items service!";

/// Body of the welcome route.
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to the items service!")]
    pub message: &'static str,
}

/// Greet the caller.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message", body = WelcomeResponse)),
    tags = ["root"],
    operation_id = "readRoot"
)]
#[get("/")]
pub async fn read_root() -> web::Json<WelcomeResponse> {
    web::Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// Serve the configured icon, or a JSON notice when none is installed.
#[utoipa::path(
    get,
    path = "/favicon.ico",
    responses(
        (status = 200, description = "Icon bytes, or `{\"detail\": \"No favicon\"}` when absent", content_type = "image/x-icon"),
        (status = 500, description = "Icon could not be read")
    ),
    tags = ["root"],
    operation_id = "favicon"
)]
#[get("/favicon.ico")]
pub async fn favicon(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let path = state.favicon_path.clone();
    let read = web::block(move || std::fs::read(path))
        .await
        .map_err(|err| Error::internal(format!("favicon read task failed: {err}")))?;

    match read {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, "image/x-icon"))
            .body(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %state.favicon_path.display(), "no favicon installed");
            Ok(HttpResponse::Ok().json(json!({ "detail": "No favicon" })))
        }
        Err(err) => Err(Error::internal(format!("failed to read favicon: {err}"))),
    }
}
