//! Handler tests for `POST /` backed by a mocked seeding use-case.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::MockDemoUsersCommand;
use crate::domain::{Address, AddressId, User, UserId};

fn spongebob() -> User {
    User::try_new(
        UserId::new(1),
        "spongebob",
        Some("Spongebob Squarepants".to_owned()),
        vec![Address::new(
            AddressId::new(1),
            "spongebob@sqlalchemy.org",
            UserId::new(1),
        )],
    )
    .expect("address belongs to spongebob")
}

fn patrick() -> User {
    User::try_new(UserId::new(3), "patrick", Some("Patrick Star".to_owned()), Vec::new())
        .expect("no addresses")
}

#[fixture]
fn seeding_ok() -> MockDemoUsersCommand {
    let mut command = MockDemoUsersCommand::new();
    command
        .expect_seed_demo_users()
        .times(1)
        .returning(|| Ok(vec![spongebob(), patrick()]));
    command
}

async fn post_root(command: MockDemoUsersCommand, body: &'static str) -> (StatusCode, Value) {
    let state = HttpState::new(Arc::new(command));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(create_demo_users),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

#[rstest]
#[actix_web::test]
async fn returns_first_user_record(seeding_ok: MockDemoUsersCommand) {
    let (status, body) = post_root(seeding_ok, "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "spongebob",
            "fullname": "Spongebob Squarepants",
            "adresses": [{"id": 1, "email_address": "spongebob@sqlalchemy.org"}],
        })
    );
}

#[rstest]
#[case("")]
#[case("not json at all")]
#[case(r#"{"name": "ignored", "adresses": []}"#)]
#[actix_web::test]
async fn request_body_is_ignored(seeding_ok: MockDemoUsersCommand, #[case] body: &'static str) {
    let (status, value) = post_root(seeding_ok, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value.get("name").and_then(Value::as_str), Some("spongebob"));
}

#[rstest]
#[case(Error::service_unavailable("pool timed out"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("duplicate key"), StatusCode::INTERNAL_SERVER_ERROR)]
#[actix_web::test]
async fn seeding_failures_map_to_error_payloads(
    #[case] failure: Error,
    #[case] expected: StatusCode,
) {
    let mut command = MockDemoUsersCommand::new();
    command
        .expect_seed_demo_users()
        .times(1)
        .returning(move || Err(failure.clone()));

    let (status, body) = post_root(command, "{}").await;

    assert_eq!(status, expected);
    assert!(body.get("code").is_some());
    let message = body.get("message").and_then(Value::as_str).expect("message");
    assert!(!message.contains("pool timed out"));
    assert!(!message.contains("duplicate key"));
}

#[rstest]
#[actix_web::test]
async fn empty_seed_result_is_an_internal_error() {
    let mut command = MockDemoUsersCommand::new();
    command
        .expect_seed_demo_users()
        .times(1)
        .returning(|| Ok(Vec::new()));

    let (status, body) = post_root(command, "{}").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.get("code").and_then(Value::as_str), Some("internal_error"));
}
