//! Configuration snapshot echoed to clients by `GET /config`.
//!
//! Values are carried as optional text exactly as configured; unset values
//! serialise as `null`. Secrets are never part of the profile.

use serde::Serialize;

/// Database connection coordinates exposed by the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseProfile {
    pub host: Option<String>,
    pub port: Option<String>,
    pub name: Option<String>,
    pub user: Option<String>,
}

/// Service identity and deployment settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceProfile {
    pub app_name: Option<String>,
    pub environment: Option<String>,
    pub port: Option<String>,
    pub database: DatabaseProfile,
}
