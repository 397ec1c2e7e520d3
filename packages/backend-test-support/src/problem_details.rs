//! Assertions for the backend's `application/problem+json` error bodies.
//!
//! Kept free of backend types so integration suites check the wire contract
//! exactly as a client sees it.

use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

const ERROR_TYPE_BASE: &str = "https://fireworks.local/errors/";

#[derive(Debug, Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Check status, headers and body of an error response.
///
/// The body's `trace_id` must equal the `x-trace-id` header and, when the
/// request went through the tracing middleware, the `x-request-id` header.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(status, expected_status, "unexpected HTTP status");
    assert_eq!(
        header_str(headers, "content-type"),
        Some("application/problem+json")
    );

    let problem: Problem = match serde_json::from_slice(body_bytes) {
        Ok(problem) => problem,
        Err(e) => panic!(
            "body is not a problem document ({e}): {}",
            String::from_utf8_lossy(body_bytes)
        ),
    };

    let trace_header =
        header_str(headers, "x-trace-id").unwrap_or_else(|| panic!("x-trace-id header missing"));
    assert_eq!(problem.trace_id, trace_header);
    if let Some(request_id) = header_str(headers, "x-request-id") {
        assert_eq!(problem.trace_id, request_id);
    }

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.kind, format!("{ERROR_TYPE_BASE}{expected_code}"));
    assert!(!problem.title.is_empty(), "title must not be empty");

    if let Some(fragment) = expected_detail_contains {
        assert!(
            problem.detail.contains(fragment),
            "detail {:?} does not mention {:?}",
            problem.detail,
            fragment
        );
    }
}

/// Read a test response and check it with [`assert_problem_details_from_parts`].
pub async fn assert_problem_details_from_service_response(
    resp: ServiceResponse,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    );
}
