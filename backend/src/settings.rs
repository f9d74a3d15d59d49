//! Service settings loaded via OrthoConfig.
//!
//! Two prefixes are read: `APP_*` for the service itself and `DB_*` for the
//! database coordinates echoed by `GET /config`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};

use crate::domain::{DatabaseProfile, ServiceProfile};

/// Port bound when `APP_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_FAVICON_PATH: &str = "favicon.ico";

/// Service identity and listener settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "APP")]
pub struct AppSettings {
    /// Human-readable application name (`APP_NAME`).
    pub name: Option<String>,
    /// Deployment environment label (`APP_ENV`).
    pub env: Option<String>,
    /// Listener port (`APP_PORT`).
    pub port: Option<u16>,
    /// Listener address (`APP_HOST`).
    pub host: Option<IpAddr>,
    /// Location of the icon served at `/favicon.ico` (`APP_FAVICON_PATH`).
    pub favicon_path: Option<PathBuf>,
}

impl AppSettings {
    /// Return the socket address to bind, falling back to `0.0.0.0:8000`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Return the favicon location, falling back to `favicon.ico`.
    pub fn favicon_path(&self) -> PathBuf {
        self.favicon_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FAVICON_PATH))
    }
}

/// Database coordinates. Only echoed; the service keeps no database.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DB")]
pub struct DatabaseSettings {
    /// `DB_HOST`
    pub host: Option<String>,
    /// `DB_PORT`, kept as text since it is only echoed.
    #[serde(default, deserialize_with = "verbatim_text")]
    pub port: Option<String>,
    /// `DB_NAME`
    pub name: Option<String>,
    /// `DB_USER`
    pub user: Option<String>,
}

/// Accept a scalar the environment layer may already have parsed as a number.
fn verbatim_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Unsigned(value) => value.to_string(),
        Scalar::Signed(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
    }))
}

/// Build the profile echoed by `GET /config`.
pub fn service_profile(app: &AppSettings, database: &DatabaseSettings) -> ServiceProfile {
    ServiceProfile {
        app_name: app.name.clone(),
        environment: app.env.clone(),
        port: app.port.map(|port| port.to_string()),
        database: DatabaseProfile {
            host: database.host.clone(),
            port: database.port.clone(),
            name: database.name.clone(),
            user: database.user.clone(),
        },
    }
}
