//! HTTP inbound adapter exposing REST endpoints.
//!
//! ```text
//! GET    /
//! GET    /favicon.ico
//! GET    /config
//! GET    /items
//! GET    /items/{id}
//! POST   /items
//! PUT    /items/{id}
//! DELETE /items/{id}
//! ```

use actix_web::web;

pub mod config;
pub mod error;
pub mod extractors;
pub mod records;
pub mod root;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

/// Register every endpoint plus the extractor configuration on `cfg`.
///
/// Handlers expect a `web::Data<state::HttpState>` registered on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use items_backend::inbound::http::register;
///
/// let _app = App::new().configure(register);
/// ```
pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extractors::json_config())
        .app_data(extractors::path_config())
        .service(root::read_root)
        .service(root::favicon)
        .service(config::read_config)
        .service(records::list_items)
        .service(records::get_item)
        .service(records::create_item)
        .service(records::update_item)
        .service(records::delete_item);
}
