//! `HttpUserDirectory` against a local mock server

mod common;

use common::{LEANNE_JSON, directory};
use mockito::Matcher;
use serde_json::json;
use user_directory_client::{ClientError, UserDirectory, UserRecord};

#[tokio::test]
async fn list_records_keeps_server_order() {
    let mut server = mockito::Server::new_async().await;
    let body = format!(
        r#"[{LEANNE_JSON}, {{"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "phone": "010-692-6593 x09125"}}]"#
    );
    let mock = server
        .mock("GET", "/users")
        .match_header("user-agent", Matcher::Regex("^user-directory/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let users = require_ok!(directory(&server).list_records().await);
    let ids: Vec<_> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![Some(1), Some(2)]);
    assert_eq!(users[1].name, "Ervin Howell");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_record_404_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/99")
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let result = directory(&server).get_record(99).await;
    assert_eq!(result, Err(ClientError::NotFound { record_id: 99 }));
    mock.assert_async().await;
}

#[tokio::test]
async fn list_records_500_is_http_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let result = directory(&server).list_records().await;
    assert!(
        matches!(&result, Err(ClientError::HttpStatus { status: 500, detail }) if detail == "oops"),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn get_record_with_garbage_body_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/1")
        .with_status(200)
        .with_body("<html>")
        .create_async()
        .await;

    let result = directory(&server).get_record(1).await;
    assert!(
        matches!(result, Err(ClientError::ParseError { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn create_record_posts_json_and_returns_echo() {
    let mut server = mockito::Server::new_async().await;
    // Exact body match: no `id`, no empty optional groups.
    let mock = server
        .mock("POST", "/users")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "New",
            "email": "n@e.w",
            "phone": "1"
        })))
        .with_status(201)
        .with_body(r#"{"id": 11, "name": "New", "email": "n@e.w", "phone": "1"}"#)
        .create_async()
        .await;

    let draft = UserRecord {
        name: "New".to_string(),
        email: "n@e.w".to_string(),
        phone: "1".to_string(),
        ..UserRecord::default()
    };
    let created = require_ok!(directory(&server).create_record(&draft).await);
    assert_eq!(created.id, Some(11));
    mock.assert_async().await;
}

#[tokio::test]
async fn update_record_puts_to_keyed_url() {
    let record: UserRecord = require_ok!(serde_json::from_str(LEANNE_JSON));
    let sent = require_ok!(serde_json::to_value(&record));

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/users/1")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(sent))
        .with_status(200)
        .with_body(LEANNE_JSON)
        .create_async()
        .await;

    let updated = require_ok!(directory(&server).update_record(1, &record).await);
    assert_eq!(updated, record);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_record_ignores_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/users/4")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    require_ok!(directory(&server).delete_record(4).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_missing_record_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/users/4")
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let result = directory(&server).delete_record(4).await;
    assert_eq!(result, Err(ClientError::NotFound { record_id: 4 }));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = require_ok!(std::net::TcpListener::bind("127.0.0.1:0"));
    let addr = require_ok!(listener.local_addr());
    drop(listener);

    let directory = require_ok!(user_directory_client::HttpUserDirectory::new(
        &user_directory_client::ClientConfig::new(format!("http://{addr}")).with_timeout_secs(2)
    ));
    let result = directory.list_records().await;
    assert!(
        matches!(result, Err(ClientError::NetworkError { .. } | ClientError::Timeout { .. })),
        "unexpected result: {result:?}"
    );
}
