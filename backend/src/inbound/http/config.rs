//! Configuration echo endpoint.
//!
//! ```text
//! GET /config
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{DatabaseProfile, ServiceProfile};
use crate::inbound::http::state::HttpState;

/// Database section of the configuration echo.
#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseConfigResponse {
    #[schema(example = "localhost")]
    pub host: Option<String>,
    #[schema(example = "5432")]
    pub port: Option<String>,
    #[schema(example = "items")]
    pub name: Option<String>,
    #[schema(example = "items_service")]
    pub user: Option<String>,
}

/// Configuration echo payload; unset values are `null`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    #[schema(example = "items-backend")]
    pub app_name: Option<String>,
    #[schema(example = "development")]
    pub environment: Option<String>,
    #[schema(example = "8000")]
    pub port: Option<String>,
    pub database: DatabaseConfigResponse,
}

impl From<&ServiceProfile> for ConfigResponse {
    fn from(profile: &ServiceProfile) -> Self {
        let DatabaseProfile {
            host,
            port,
            name,
            user,
        } = &profile.database;
        Self {
            app_name: profile.app_name.clone(),
            environment: profile.environment.clone(),
            port: profile.port.clone(),
            database: DatabaseConfigResponse {
                host: host.clone(),
                port: port.clone(),
                name: name.clone(),
                user: user.clone(),
            },
        }
    }
}

/// Echo the service configuration.
#[utoipa::path(
    get,
    path = "/config",
    responses((status = 200, description = "Configured values", body = ConfigResponse)),
    tags = ["config"],
    operation_id = "readConfig"
)]
#[get("/config")]
pub async fn read_config(state: web::Data<HttpState>) -> web::Json<ConfigResponse> {
    web::Json(ConfigResponse::from(state.profile.as_ref()))
}
