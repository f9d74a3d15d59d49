//! Backend entry-point: wires the item endpoints, configuration echo, and OpenAPI docs.

mod server;

use std::ffi::OsString;
use std::io;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use items_backend::settings::{AppSettings, DatabaseSettings, service_profile};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let app = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load APP settings: {e}")))?;
    // CLI flags belong to the app settings; database values come from env and files only.
    let program = std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("items-backend"));
    let database = DatabaseSettings::load_from_iter(std::iter::once(program))
        .map_err(|e| io::Error::other(format!("failed to load DB settings: {e}")))?;

    let config = ServerConfig::new(
        app.bind_addr(),
        service_profile(&app, &database),
        app.favicon_path(),
    );
    info!(bind_addr = %config.bind_addr(), "items service listening");
    create_server(config)?.await
}
