//! Handler tests for the record CRUD routes.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ServiceProfile;
use crate::domain::ports::{MockRecordsCommand, MockRecordsQuery};
use crate::inbound::http::register;
use crate::inbound::http::state::HttpStatePorts;
use crate::outbound::memory::RecordStore;

fn store_state(store: Arc<RecordStore>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        HttpStatePorts::from_store(store),
        ServiceProfile::default(),
        "favicon.ico",
    ))
}

async fn init_app(
    state: web::Data<HttpState>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(App::new().app_data(state).configure(register)).await
}

fn lamp() -> Value {
    json!({ "id": 1, "name": "Lamp", "description": null, "price": 10.0 })
}

fn chair() -> Value {
    json!({ "id": 2, "name": "Chair", "description": "Oak", "price": 45.5 })
}

async fn post_item<S>(app: &S, body: Value) -> ServiceResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri("/items")
        .set_json(body)
        .to_request();
    actix_test::call_service(app, request).await
}

#[actix_web::test]
async fn list_is_empty_for_a_fresh_store() {
    let app = init_app(store_state(Arc::new(RecordStore::new()))).await;
    let request = actix_test::TestRequest::get().uri("/items").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn created_items_are_listed_in_insertion_order() {
    let store = Arc::new(RecordStore::new());
    let app = init_app(store_state(store.clone())).await;

    let response = post_item(&app, lamp()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": ITEM_ADDED, "item": lamp() }));

    let response = post_item(&app, chair()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = actix_test::TestRequest::get().uri("/items").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body, json!([lamp(), chair()]));
    assert_eq!(store.len(), 2);
}

#[actix_web::test]
async fn missing_description_defaults_to_null() {
    let app = init_app(store_state(Arc::new(RecordStore::new()))).await;
    let response = post_item(&app, json!({ "id": 3, "name": "Desk", "price": 99.0 })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["item"]["description"], Value::Null);
}

#[actix_web::test]
async fn duplicate_ids_are_accepted_and_first_match_wins() {
    let app = init_app(store_state(Arc::new(RecordStore::new()))).await;
    post_item(&app, lamp()).await;
    let shadow = json!({ "id": 1, "name": "Shadow", "description": null, "price": 1.0 });
    let response = post_item(&app, shadow).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = actix_test::TestRequest::get().uri("/items/1").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body, lamp());
}

#[actix_web::test]
async fn get_returns_the_stored_item() {
    let app = init_app(store_state(Arc::new(RecordStore::new()))).await;
    post_item(&app, chair()).await;
    let request = actix_test::TestRequest::get().uri("/items/2").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body, chair());
}

#[rstest]
#[case::get(actix_test::TestRequest::get().uri("/items/99"))]
#[case::put(actix_test::TestRequest::put().uri("/items/99").set_json(lamp()))]
#[case::delete(actix_test::TestRequest::delete().uri("/items/99"))]
#[actix_web::test]
async fn unknown_id_is_not_found(#[case] request: actix_test::TestRequest) {
    let app = init_app(store_state(Arc::new(RecordStore::new()))).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "record 99 not found");
    assert_eq!(body["details"]["id"], 99);
}

#[actix_web::test]
async fn replace_swaps_every_field() {
    let app = init_app(store_state(Arc::new(RecordStore::new()))).await;
    post_item(&app, lamp()).await;
    let updated = json!({ "id": 1, "name": "Lamp", "description": "Brass", "price": 12.5 });

    let request = actix_test::TestRequest::put()
        .uri("/items/1")
        .set_json(&updated)
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body, json!({ "message": ITEM_UPDATED, "item": updated }));

    let request = actix_test::TestRequest::get().uri("/items/1").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body, updated);
}

#[actix_web::test]
async fn replace_with_a_new_id_moves_the_item() {
    let app = init_app(store_state(Arc::new(RecordStore::new()))).await;
    post_item(&app, lamp()).await;
    let moved = json!({ "id": 7, "name": "Lamp", "description": null, "price": 10.0 });

    let request = actix_test::TestRequest::put()
        .uri("/items/1")
        .set_json(&moved)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = actix_test::TestRequest::get().uri("/items/1").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = actix_test::TestRequest::get().uri("/items/7").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body, moved);
}

#[actix_web::test]
async fn delete_returns_the_removed_item() {
    let app = init_app(store_state(Arc::new(RecordStore::new()))).await;
    post_item(&app, lamp()).await;
    post_item(&app, chair()).await;

    let request = actix_test::TestRequest::delete().uri("/items/1").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body, json!({ "message": ITEM_DELETED, "item": lamp() }));

    let request = actix_test::TestRequest::get().uri("/items").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body, json!([chair()]));
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
#[actix_web::test]
async fn blank_names_are_rejected(#[case] name: &str) {
    let store = Arc::new(RecordStore::new());
    let app = init_app(store_state(store.clone())).await;
    let response = post_item(&app, json!({ "id": 1, "name": name, "price": 1.0 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"], json!({ "field": "name", "code": "empty_name" }));
    assert!(store.is_empty());
}

#[rstest]
#[case::missing_price(json!({ "id": 1, "name": "Lamp" }))]
#[case::string_id(json!({ "id": "one", "name": "Lamp", "price": 1.0 }))]
#[case::not_an_object(json!([1, 2, 3]))]
#[actix_web::test]
async fn malformed_bodies_are_rejected(#[case] body: Value) {
    let app = init_app(store_state(Arc::new(RecordStore::new()))).await;
    let response = post_item(&app, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_json");
}

#[actix_web::test]
async fn bodies_without_content_type_are_parsed_as_json() {
    let store = Arc::new(RecordStore::new());
    let app = init_app(store_state(store.clone())).await;
    let request = actix_test::TestRequest::post()
        .uri("/items")
        .set_payload(r#"{"id":1,"name":"Lamp","price":10.0}"#)
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": ITEM_ADDED, "item": lamp() }));
    assert_eq!(store.len(), 1);
}

#[rstest]
#[case::get(actix_test::TestRequest::get().uri("/items/abc"))]
#[case::delete(actix_test::TestRequest::delete().uri("/items/1.5"))]
#[actix_web::test]
async fn non_integer_ids_are_rejected(#[case] request: actix_test::TestRequest) {
    let app = init_app(store_state(Arc::new(RecordStore::new()))).await;
    let response = actix_test::call_service(&app, request.to_request()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"], json!({ "field": "id", "code": "invalid_path" }));
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let mut query = MockRecordsQuery::new();
    query.expect_list_records().times(1).return_once(|| {
        Err(Error::internal("store exploded").with_details(json!({ "secret": true })))
    });
    let ports = HttpStatePorts {
        records: Arc::new(MockRecordsCommand::new()),
        records_query: Arc::new(query),
    };
    let state = web::Data::new(HttpState::new(ports, ServiceProfile::default(), "favicon.ico"));
    let app = init_app(state).await;

    let request = actix_test::TestRequest::get().uri("/items").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
    assert!(body.get("details").is_none());
}

#[actix_web::test]
async fn command_port_receives_the_path_id() {
    let mut command = MockRecordsCommand::new();
    command
        .expect_delete_record()
        .withf(|id| *id == RecordId::new(5))
        .times(1)
        .return_once(|id| Ok(Record::new(id, RecordName::new("Lamp").expect("name"), 3.0)));
    let ports = HttpStatePorts {
        records: Arc::new(command),
        records_query: Arc::new(MockRecordsQuery::new()),
    };
    let state = web::Data::new(HttpState::new(ports, ServiceProfile::default(), "favicon.ico"));
    let app = init_app(state).await;

    let request = actix_test::TestRequest::delete().uri("/items/5").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["item"]["id"], 5);
    assert_eq!(body["message"], ITEM_DELETED);
}
