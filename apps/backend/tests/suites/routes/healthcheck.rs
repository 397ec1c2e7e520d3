use actix_web::http::StatusCode;
use actix_web::test;

use crate::common::test_state;
use crate::support::create_test_app;

#[actix_web::test]
async fn health_reports_ok_and_version() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["time"].as_str().is_some_and(|t| !t.is_empty()));
}
