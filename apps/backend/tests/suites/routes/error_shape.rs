use actix_web::http::StatusCode;
use actix_web::test;
use fireworks::extractors::encode_segment;
use serde_json::Value;

use crate::common::test_state;
use crate::support::create_test_app;

fn header(resp: &actix_web::dev::ServiceResponse, name: &str) -> String {
    resp.headers()
        .get(name)
        .unwrap_or_else(|| panic!("{name} header should be present"))
        .to_str()
        .unwrap()
        .to_string()
}

#[actix_web::test]
async fn error_trace_id_matches_headers() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri(&format!(
            "/backend/game/all-games-with-player/{}",
            encode_segment("Nobody")
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/problem+json"
    );

    let trace_header = header(&resp, "x-trace-id");
    let request_header = header(&resp, "x-request-id");
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["trace_id"], trace_header.as_str());
    assert_eq!(trace_header, request_header);
    assert_eq!(body["code"], "PLAYER_NOT_FOUND");
    assert_eq!(
        body["type"],
        "https://fireworks.local/errors/PLAYER_NOT_FOUND"
    );
    assert_eq!(body["status"], 404);
}

#[actix_web::test]
async fn incoming_request_id_is_reused() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/backend/game/create-new-game")
        .insert_header(("x-request-id", "client-req_42"))
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header(&resp, "x-request-id"), "client-req_42");
    assert_eq!(header(&resp, "x-trace-id"), "client-req_42");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["trace_id"], "client-req_42");
}

#[actix_web::test]
async fn malformed_request_id_is_replaced() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("x-request-id", "spaces are not allowed"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let minted = header(&resp, "x-request-id");
    assert_ne!(minted, "spaces are not allowed");
    assert!(uuid::Uuid::parse_str(&minted).is_ok());
}

#[actix_web::test]
async fn missing_body_is_a_bad_request() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/backend/player/new-player")
        .insert_header(("content-type", "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    fireworks_test_support::assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}
