use std::rc::Rc;
use std::time::Duration;

use http_facade::{ClientDefaults, LogListener, Overrides, RequestClient};
use httpmock::MockServer;
use serde_json::json;

use crate::common::{create_file, RecordingListener, Seen};

mod common;

#[test]
fn simple_get() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/simple_get/30")
            .header("content-type", "application/json");
        then.status(200)
            .header("x-server", "mock")
            .body(r#"{"value": true}"#);
    });

    let client = RequestClient::default();
    let response = client
        .get(&server.url("/simple_get/30"), &Overrides::default())
        .unwrap();

    mock.assert();
    assert_eq!(response.code(), 200);
    assert_eq!(response.header()[0], "HTTP/1.1 200 OK");
    assert_eq!(response.header_value("X-Server"), Some("mock"));
    assert_eq!(response.body_json(), Some(json!({"value": true})));
}

#[test]
fn simple_post_with_basic_auth() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/simple_post")
            .header("authorization", "Basic dXNlcjpwYXNz")
            .header("content-type", "text/plain")
            .header("accept", "*/*")
            .body("hello");
        then.status(201).body("created");
    });

    let mut client = RequestClient::default();
    client.set_default_headers(vec!["Accept: */*".to_string()]);

    let response = client
        .post(
            &server.url("/simple_post"),
            "hello",
            &Overrides::default()
                .content_type("text/plain")
                .basic_auth("user", "pass"),
        )
        .unwrap();

    mock.assert();
    assert_eq!(response.code(), 201);
    assert_eq!(response.body(), "created");
}

#[test]
fn error_status_is_returned() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path("/missing");
        then.status(404).body("{a");
    });

    let client = RequestClient::default();
    let response = client
        .delete(&server.url("/missing"), "", &Overrides::default())
        .unwrap();

    assert_eq!(response.code(), 404);
    assert_eq!(response.header()[0], "HTTP/1.1 404 Not Found");
    assert_eq!(response.body(), "{a");
    assert_eq!(response.body_json(), None);
}

#[test]
fn connection_refused_is_an_empty_response() {
    let client = RequestClient::default();
    let response = client
        .get(
            "http://127.0.0.1:1/",
            &Overrides::default().timeout(Duration::from_secs(2)),
        )
        .unwrap();

    assert_eq!(response.code(), 0);
    assert_eq!(response.body(), "");
    assert!(response.header().is_empty());
}

#[test]
fn head_sends_a_get() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/head");
        then.status(200).body("full body");
    });

    let client = RequestClient::default();
    let response = client
        .head(&server.url("/head"), &Overrides::default())
        .unwrap();

    mock.assert();
    assert_eq!(response.body(), "full body");
}

#[test]
fn defaults_from_file_and_redacted_listener() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::PUT)
            .path("/items/1")
            .header("authorization", "Basic YWRtaW46c2VjcmV0")
            .header("content-type", "application/xml")
            .header("user-agent", "facade-test");
        then.status(204);
    });

    let defaults_file = create_file(
        r#"{
            "content_type": "application/xml",
            "timeout": 5,
            "transport_options": {"user_agent": "facade-test"},
            "basic_auth_user": "admin",
            "basic_auth_password": "secret"
        }"#,
    );
    let defaults = ClientDefaults::from_file(&defaults_file).unwrap();

    let recorder = RecordingListener::shared();
    let mut client = RequestClient::new(defaults);
    client.add_listener(Rc::clone(&recorder));
    client.add_listener(LogListener::new());

    let url = server.url("/items/1");
    let response = client.put(&url, "<item/>", &Overrides::default()).unwrap();

    mock.assert();
    assert_eq!(response.code(), 204);
    assert_eq!(response.body(), "");

    let seen = recorder.0.borrow();
    assert_eq!(seen.len(), 2);
    match (&seen[0], &seen[1]) {
        (Seen::Start(start_id, seen_url, options), Seen::End(end_id)) => {
            assert_eq!(start_id, end_id);
            assert_eq!(seen_url, &url);
            assert_eq!(
                *options,
                json!({
                    "http": {
                        "method": "PUT",
                        "header": [
                            "Content-Type: application/xml",
                            "Authorization: Basic _removed_"
                        ],
                        "content": "<item/>",
                        "timeout": 5,
                        "ignore_errors": true,
                        "user_agent": "facade-test"
                    }
                })
            );
        }
        other => panic!("unexpected notifications {:?}", other),
    }
}
