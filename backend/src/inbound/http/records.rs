//! Record CRUD handlers.
//!
//! ```text
//! GET    /items
//! GET    /items/{id}
//! POST   /items       {"id":1,"name":"Lamp","description":null,"price":10.0}
//! PUT    /items/{id}  {"id":1,"name":"Lamp","description":"desk","price":12.5}
//! DELETE /items/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Record, RecordId, RecordName, RecordValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RecordSchema};
use crate::inbound::http::state::HttpState;

/// Message returned after a successful insert.
pub const ITEM_ADDED: &str = "Item added successfully";
/// Message returned after a successful replacement.
pub const ITEM_UPDATED: &str = "Item updated successfully";
/// Message returned after a successful delete.
pub const ITEM_DELETED: &str = "Item deleted";

/// Request body for `POST /items` and `PUT /items/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RecordPayload {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Lamp")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Desk lamp")]
    pub description: Option<String>,
    #[schema(example = 10.0)]
    pub price: f64,
}

impl TryFrom<RecordPayload> for Record {
    type Error = RecordValidationError;

    fn try_from(value: RecordPayload) -> Result<Self, Self::Error> {
        let RecordPayload {
            id,
            name,
            description,
            price,
        } = value;
        let name = RecordName::new(name)?;
        Ok(Self::new(RecordId::new(id), name, price).with_optional_description(description))
    }
}

fn map_validation_error(err: RecordValidationError) -> Error {
    match err {
        RecordValidationError::EmptyName => Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "name", "code": "empty_name" })),
    }
}

fn record_from_payload(payload: web::Json<RecordPayload>) -> ApiResult<Record> {
    Record::try_from(payload.into_inner()).map_err(map_validation_error)
}

/// Envelope returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordMutationResponse {
    #[schema(example = "Item added successfully")]
    pub message: String,
    #[schema(value_type = RecordSchema)]
    pub item: Record,
}

impl RecordMutationResponse {
    fn new(message: &str, item: Record) -> web::Json<Self> {
        web::Json(Self {
            message: message.to_owned(),
            item,
        })
    }
}

/// List all records in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use items_backend::inbound::http::records::list_items;
///
/// let app = App::new().service(list_items);
/// ```
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "Records in insertion order", body = [RecordSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Record>>> {
    let records = state.records_query.list_records().await?;
    Ok(web::Json(records))
}

/// Fetch the first record carrying `id`.
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Record", body = RecordSchema),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Record not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Record>> {
    let id = RecordId::new(path.into_inner());
    let record = state.records_query.fetch_record(id).await?;
    Ok(web::Json(record))
}

/// Append a record. Duplicate ids are accepted.
#[utoipa::path(
    post,
    path = "/items",
    request_body = RecordPayload,
    responses(
        (status = 200, description = "Record added", body = RecordMutationResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<RecordPayload>,
) -> ApiResult<web::Json<RecordMutationResponse>> {
    let record = record_from_payload(payload)?;
    let created = state.records.create_record(record).await?;
    Ok(RecordMutationResponse::new(ITEM_ADDED, created))
}

/// Replace every field of the record stored under `id`.
///
/// The body's own `id` may differ from the path id; it is stored as given.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Identifier of the record to replace")),
    request_body = RecordPayload,
    responses(
        (status = 200, description = "Record replaced", body = RecordMutationResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Record not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<RecordPayload>,
) -> ApiResult<web::Json<RecordMutationResponse>> {
    let id = RecordId::new(path.into_inner());
    let record = record_from_payload(payload)?;
    let replaced = state.records.replace_record(id, record).await?;
    Ok(RecordMutationResponse::new(ITEM_UPDATED, replaced))
}

/// Remove the record stored under `id` and return it.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Identifier of the record to delete")),
    responses(
        (status = 200, description = "Record deleted", body = RecordMutationResponse),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Record not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<RecordMutationResponse>> {
    let id = RecordId::new(path.into_inner());
    let deleted = state.records.delete_record(id).await?;
    Ok(RecordMutationResponse::new(ITEM_DELETED, deleted))
}

#[cfg(test)]
mod tests;
