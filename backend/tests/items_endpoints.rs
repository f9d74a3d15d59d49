//! End-to-end coverage of the item endpoints through the full middleware stack.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use items_backend::Trace;
use items_backend::domain::{ServiceProfile, TRACE_ID_HEADER};
use items_backend::inbound::http::register;
use items_backend::inbound::http::state::{HttpState, HttpStatePorts};
use items_backend::outbound::memory::RecordStore;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn store() -> Arc<RecordStore> {
    Arc::new(RecordStore::new())
}

async fn app(
    store: Arc<RecordStore>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let state = web::Data::new(HttpState::new(
        HttpStatePorts::from_store(store),
        ServiceProfile::default(),
        "favicon.ico",
    ));
    test::init_service(App::new().app_data(state).wrap(Trace).configure(register)).await
}

async fn send<S>(app: &S, request: test::TestRequest) -> (StatusCode, Option<String>, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(response).await;
    (status, trace_id, body)
}

fn item(id: i64, name: &str, price: f64) -> Value {
    json!({ "id": id, "name": name, "description": null, "price": price })
}

#[rstest]
#[actix_web::test]
async fn full_item_lifecycle(store: Arc<RecordStore>) {
    let app = app(store.clone()).await;

    let (status, _, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/items")
            .set_json(item(1, "A", 1.0)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item added successfully");

    send(
        &app,
        test::TestRequest::post()
            .uri("/items")
            .set_json(item(2, "B", 2.0)),
    )
    .await;

    let (_, _, body) = send(&app, test::TestRequest::get().uri("/items")).await;
    assert_eq!(body, json!([item(1, "A", 1.0), item(2, "B", 2.0)]));

    let (status, _, body) = send(
        &app,
        test::TestRequest::put()
            .uri("/items/1")
            .set_json(item(1, "A2", 5.0)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item updated successfully");

    let (_, _, body) = send(&app, test::TestRequest::get().uri("/items/1")).await;
    assert_eq!(body, item(1, "A2", 5.0));

    let (status, _, body) = send(&app, test::TestRequest::delete().uri("/items/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Item deleted", "item": item(1, "A2", 5.0) }));

    let (_, _, body) = send(&app, test::TestRequest::get().uri("/items")).await;
    assert_eq!(body, json!([item(2, "B", 2.0)]));
    assert_eq!(store.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn error_bodies_carry_the_response_trace_id(store: Arc<RecordStore>) {
    let app = app(store).await;

    let (status, header, body) = send(&app, test::TestRequest::get().uri("/items/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    let header = header.expect("trace-id header");
    assert_eq!(body["traceId"].as_str(), Some(header.as_str()));
}

#[rstest]
#[actix_web::test]
async fn validation_failures_leave_the_store_untouched(store: Arc<RecordStore>) {
    let app = app(store.clone()).await;

    let (status, header, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/items")
            .set_json(json!({ "id": 1, "name": " ", "price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "empty_name");
    assert!(header.is_some());
    assert!(store.is_empty());
}
