//! Tests for the submission endpoint, driven through the full route table.

use std::sync::Arc;

use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use actix_web::http::{Method, StatusCode};
use actix_web::{test, web};
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::ports::SubmissionRepositoryError;
use crate::inbound::http::error::INTERNAL_ERROR_MESSAGE;
use crate::inbound::http::routes::{SUBMIT_SERVICE_PATH, build_app};
use crate::inbound::http::test_utils::{InMemorySubmissionRepository, state_over};

#[fixture]
fn repository() -> Arc<InMemorySubmissionRepository> {
    Arc::new(InMemorySubmissionRepository::default())
}

async fn send(
    repository: Arc<InMemorySubmissionRepository>,
    request: test::TestRequest,
) -> actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody> {
    let app = test::init_service(build_app(web::Data::new(state_over(repository)))).await;
    test::call_service(&app, request.uri(SUBMIT_SERVICE_PATH).to_request()).await
}

#[rstest]
#[actix_web::test]
async fn valid_submission_is_stored(repository: Arc<InMemorySubmissionRepository>) {
    let request = test::TestRequest::post()
        .set_json(json!({"nombre": "Ana", "telefono": "555-1234", "servicio": "limpieza"}));

    let res = send(Arc::clone(&repository), request).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: MessageResponse = test::read_body_json(res).await;
    assert_eq!(body.message, SUBMISSION_ACCEPTED_MESSAGE);
    assert_eq!(
        repository.rows(),
        vec![Submission::new("Ana", "555-1234", "limpieza")]
    );
}

#[rstest]
#[actix_web::test]
async fn body_is_decoded_without_json_content_type(repository: Arc<InMemorySubmissionRepository>) {
    let request = test::TestRequest::post()
        .insert_header((CONTENT_TYPE, "text/plain"))
        .set_payload(r#"{"nombre":"Luis","telefono":"600","servicio":"jardinería"}"#);

    let res = send(Arc::clone(&repository), request).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(repository.rows().len(), 1);
}

#[rstest]
#[actix_web::test]
async fn identical_submissions_create_distinct_rows(
    repository: Arc<InMemorySubmissionRepository>,
) {
    let app = test::init_service(build_app(web::Data::new(state_over(Arc::clone(
        &repository,
    )))))
    .await;
    let payload = json!({"nombre": "Ana", "telefono": "555-1234", "servicio": "limpieza"});

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(SUBMIT_SERVICE_PATH)
            .set_json(&payload)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert_eq!(repository.rows().len(), 2);
}

#[rstest]
#[case(r#"{"nombre":123}"#)]
#[case(r#"{"nombre":"Ana","telefono":"555-1234""#)]
#[case(r#"{"nombre":"Ana","telefono":"555-1234"}"#)]
#[case(r#"["Ana","555-1234","limpieza"]"#)]
#[case("null")]
#[case(r#"{"nombre":"Ana","telefono":"1","servicio":"x"} trailing"#)]
#[case("not json")]
#[case("")]
#[actix_web::test]
async fn undecodable_payload_is_rejected(
    repository: Arc<InMemorySubmissionRepository>,
    #[case] payload: &'static str,
) {
    let request = test::TestRequest::post()
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload(payload);

    let res = send(Arc::clone(&repository), request).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: MessageResponse = test::read_body_json(res).await;
    assert_eq!(body.message, DECODE_ERROR_MESSAGE);
    assert!(repository.rows().is_empty());
}

#[rstest]
#[case(Method::GET)]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[case(Method::PATCH)]
#[actix_web::test]
async fn non_post_methods_are_rejected(
    repository: Arc<InMemorySubmissionRepository>,
    #[case] method: Method,
) {
    let request = test::TestRequest::default()
        .method(method)
        .set_json(json!({"nombre": "Ana", "telefono": "555-1234", "servicio": "limpieza"}));

    let res = send(Arc::clone(&repository), request).await;

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: MessageResponse = test::read_body_json(res).await;
    assert_eq!(body.message, METHOD_NOT_ALLOWED_MESSAGE);
    assert!(repository.rows().is_empty());
}

#[rstest]
#[actix_web::test]
async fn preflight_does_not_touch_the_store(repository: Arc<InMemorySubmissionRepository>) {
    let request = test::TestRequest::default()
        .method(Method::OPTIONS)
        .set_json(json!({"nombre": "Ana", "telefono": "555-1234", "servicio": "limpieza"}));

    let res = send(Arc::clone(&repository), request).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = test::read_body(res).await;
    assert!(body.is_empty());
    assert!(repository.rows().is_empty());
}

#[actix_web::test]
async fn store_failure_is_redacted() {
    let repository = Arc::new(InMemorySubmissionRepository::failing(
        SubmissionRepositoryError::connection("write tcp 10.0.0.5:5432: broken pipe"),
    ));
    let request = test::TestRequest::post()
        .set_json(json!({"nombre": "Ana", "telefono": "555-1234", "servicio": "limpieza"}));

    let res = send(repository, request).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(res).await;
    let text = std::str::from_utf8(&body).expect("utf8 body");
    assert!(!text.contains("broken pipe"));
    let parsed: MessageResponse = serde_json::from_str(text).expect("JSON body");
    assert_eq!(parsed.message, INTERNAL_ERROR_MESSAGE);
}

#[rstest]
#[case(Method::POST, r#"{"nombre":"Ana","telefono":"1","servicio":"x"}"#)]
#[case(Method::POST, "{")]
#[case(Method::GET, "")]
#[actix_web::test]
async fn every_response_carries_cors_headers(
    repository: Arc<InMemorySubmissionRepository>,
    #[case] method: Method,
    #[case] payload: &'static str,
) {
    let request = test::TestRequest::default()
        .method(method)
        .set_payload(payload);

    let res = send(repository, request).await;

    let headers = res.headers();
    assert_eq!(
        headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(headers.contains_key(ACCESS_CONTROL_ALLOW_METHODS));
    assert!(headers.contains_key(ACCESS_CONTROL_ALLOW_HEADERS));
}

// `test` names the actix module here, so the built-in attribute is spelled out.
#[::core::prelude::v1::test]
fn request_maps_onto_domain_submission() {
    let request: SubmissionRequest = serde_json::from_value(json!({
        "nombre": "Ana",
        "telefono": "555-1234",
        "servicio": "limpieza",
        "extra": true
    }))
    .expect("unknown fields are ignored");
    let submission: Submission = request.into();
    assert_eq!(submission, Submission::new("Ana", "555-1234", "limpieza"));
}

#[::core::prelude::v1::test]
fn request_decodes_only_from_objects() {
    for value in [
        json!(["Ana", "555-1234", "limpieza"]),
        json!(null),
        json!("Ana"),
    ] {
        assert!(serde_json::from_value::<SubmissionRequest>(value).is_err());
    }
}

#[::core::prelude::v1::test]
fn repeated_key_keeps_last_value() {
    let request: SubmissionRequest = serde_json::from_str(
        r#"{"nombre":"Ana","nombre":"Luis","telefono":"600","servicio":"poda"}"#,
    )
    .expect("repeated keys decode");
    assert_eq!(request.name, "Luis");
}
